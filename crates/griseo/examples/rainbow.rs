//! Render a few styled lines at every support level.
//!
//! Run with `cargo run --example rainbow`.

use griseo::{brush, Brush, Level};

fn show(label: &str, level: Level) {
    let chain = Brush::new(level).chain();

    let swatches = [
        chain.red().paint("red"),
        chain.yellow_bright().paint("yellow"),
        chain.hex("#00A36C").paint("jade"),
        chain.rgb(255, 105, 180).paint("pink"),
        chain.ansi256(93).paint("violet"),
        chain.bg_blue().white_bright().paint("sky"),
        chain.bold().underline().paint("loud"),
    ];

    println!("{:>10}:  {}", label, swatches.join("  "));
}

fn main() {
    show("none", Level::None);
    show("basic", Level::Basic);
    show("ansi256", Level::Ansi256);
    show("truecolor", Level::TrueColor);

    let detected = brush();
    println!(
        "\n  detected:  {}",
        detected
            .green()
            .paint(format!("level {}", u8::from(detected.level())))
    );
}
