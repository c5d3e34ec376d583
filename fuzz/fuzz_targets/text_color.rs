#![no_main]

use auto_contrast::{select_text_color, ContrastOptions, Direction, Strategy};
use libfuzzer_sys::fuzz_target;

fn strategy_for(tag: u8) -> Strategy {
    match tag % 6 {
        0 => Strategy::Accessibility,
        1 => Strategy::Complementary,
        2 => Strategy::Analogous,
        3 => Strategy::Adjacent,
        4 => Strategy::Contrast,
        _ => Strategy::Custom,
    }
}

fn f64_from(bytes: &[u8]) -> f64 {
    let mut raw = [0u8; 8];
    for (slot, byte) in raw.iter_mut().zip(bytes) {
        *slot = *byte;
    }
    // deliberately includes NaN and the infinities
    f64::from_le_bytes(raw)
}

// The engine must never panic: any byte soup becomes a background string
// plus a configuration, and the only acceptable failure is InvalidColorError.
fuzz_target!(|data: &[u8]| {
    if data.len() < 18 {
        return;
    }
    let (head, tail) = data.split_at(18);

    let options = ContrastOptions::new(strategy_for(head[0]))
        .direction(if head[1] % 2 == 0 {
            Direction::Clockwise
        } else {
            Direction::CounterClockwise
        })
        .custom_degree(f64_from(&head[2..10]))
        .threshold(f64_from(&head[10..18]));

    let background = String::from_utf8_lossy(tail);
    let _ = select_text_color(&background, &options);

    // selecting with swapped light/dark must not panic either
    let swapped = options
        .clone()
        .light_color("#000000")
        .dark_color("#FFFFFF");
    let _ = select_text_color(&background, &swapped);
});
