//! Render sample backgrounds with their selected text colors using ANSI
//! truecolor escapes.
//!
//! Run with `RUST_LOG=auto_contrast=debug` to see the normalization and
//! achromatic-fallback events.

use std::str::FromStr;

use auto_contrast::{select_text_color, ContrastOptions, Rgba, Strategy};
use tracing_subscriber::EnvFilter;

fn channels(color: &str) -> (u8, u8, u8) {
    let c = Rgba::from_str(color).expect("engine output parses back");
    ((c.0 * 255.) as u8, (c.1 * 255.) as u8, (c.2 * 255.) as u8)
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let backgrounds = [
        "#800080",
        "#3366cc",
        "#ff7700",
        "#1b4332",
        "#808080",
        "#fffff0",
        "tomato",
    ];

    for background in backgrounds {
        let (br, bg_, bb) = channels(background);
        print!("{background:>10}  ");
        for strategy in Strategy::ALL {
            let options = ContrastOptions::new(strategy);
            let selection = select_text_color(background, &options).expect("valid background");
            let (fr, fg, fb) = channels(&selection.color);
            let marker = if selection.achromatic_fallback { "*" } else { " " };
            print!(
                "\x1b[48;2;{br};{bg_};{bb}m\x1b[38;2;{fr};{fg};{fb}m {:^13} \x1b[0m{marker}",
                strategy.name()
            );
        }
        println!();
    }
    println!("\n  * achromatic background, fell back to the accessibility policy");
}
