//! Parsing is reentrant and documents can be shared across threads.

use std::sync::Arc;
use std::thread;

use vcardkit_test::component::vcard::{VCard, parse};

use crate::helpers::{VALID, large_card};

#[test_log::test]
fn concurrent_parses_agree() {
    let expected = parse(VALID).unwrap();

    let handles: Vec<_> = (0..8)
        .map(|_| thread::spawn(|| parse(VALID).unwrap()))
        .collect();

    for handle in handles {
        assert_eq!(handle.join().unwrap(), expected);
    }
}

#[test_log::test]
fn documents_are_shareable() {
    let card: Arc<VCard> = Arc::new(parse(&large_card(100)).unwrap());

    let handles: Vec<_> = (0..4)
        .map(|_| {
            let card = Arc::clone(&card);
            thread::spawn(move || card.email().len())
        })
        .collect();

    for handle in handles {
        assert_eq!(handle.join().unwrap(), 100);
    }
}
