//! Chains fallible lookups through Maybe instead of null sentinels.

use maybe::{Just, Maybe, Nothing};

fn lookup_user(id: u32) -> Maybe<&'static str> {
    match id {
        1 => Just("alice"),
        2 => Just("bob"),
        _ => Nothing,
    }
}

fn lookup_port(name: &str) -> Maybe<u16> {
    if name == "alice" { Just(7000) } else { Nothing }
}

fn main() {
    for id in [1u32, 2, 9] {
        let report = lookup_user(id)
            .and_then(lookup_port)
            .map(|port| format!("port {port}"))
            .or_else(|| Just("unreachable".to_string()))
            .with_default(String::new());
        println!("user {id}: {report}");
    }
}
