//! Basic encoding example

use umorse_core::{
    constants::DEFAULT_CAPACITY,
    encoder::{encode_aligned, encode_compact},
    output::{output, EventLog},
    Event, OutputFlags, Spacing,
};

fn render(events: &[Event]) -> String {
    events
        .iter()
        .map(|e| match e {
            Event::Dit => ".",
            Event::Dah => "_",
            Event::Silence(Spacing::Stop) => "\n",
            Event::Silence(Spacing::Word) => " / ",
            Event::Silence(Spacing::Character) => " ",
            Event::Silence(_) => "",
        })
        .collect()
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    println!("uMorse Basic Encoding Example\n");

    let text = "Hello World!\nThis is uMorse.\n0123456789";
    println!("Translating {} bytes:\n{:?}\n", text.len(), text);

    let mut code = [0u8; DEFAULT_CAPACITY];

    let len = encode_aligned(text.as_bytes(), &mut code)?;
    let mut log = EventLog::new();
    output(&mut log, &code[..len], OutputFlags::new(OutputFlags::NO_DELAY));
    println!("Aligned encoding ({} bytes):\n{}", len, render(log.events()));

    let len = encode_compact(text.as_bytes(), &mut code)?;
    let mut log = EventLog::new();
    output(&mut log, &code[..len], OutputFlags::new(OutputFlags::NO_DELAY));
    println!("Compact encoding ({} bytes):\n{}", len, render(log.events()));

    std::fs::write("example_output.morse", &code[..len])?;

    println!("Wrote {} bytes to example_output.morse", len);
    println!("Use 'umorse play --input example_output.morse' to play it back");

    Ok(())
}
