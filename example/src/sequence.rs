use crate::utils::print;
use ripple::prelude::*;

#[cfg_attr(test, test)]
pub fn main() {
    println!("----- sequence example -----\n");

    println!("from_sequence([1, 2, 3]).map(to_string)");
    Observable::from_sequence([1, 2, 3])
        .map(|n: i32| n.to_string())
        .subscribe(print::<String>);

    println!("from_sequence([1, 2, 3]).filter(odd)");
    Observable::from_sequence([1, 2, 3])
        .filter(|n: &i32| n % 2 != 0)
        .subscribe(print::<i32>);

    println!("from_handler(next 1, 2, 3; completed)");
    Observable::from_handler(|mut subscriber| {
        subscriber.next(1);
        subscriber.next(2);
        subscriber.next(3);
        subscriber.complete();
    })
    .subscribe(print::<i32>);

    println!("from_sequence([\"4\", \"x\"]).try_map(parse)");
    Observable::from_sequence(["4", "x"])
        .try_map(str::parse::<u32>)
        .subscribe(print::<u32>);

    println!();
}
