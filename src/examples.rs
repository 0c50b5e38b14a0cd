/// Canned news snippets offered for manual testing, keyed 1-4. One per
/// category the backend knows about.
pub const EXAMPLES: [(u8, &str); 4] = [
    (
        1,
        "UN Secretary addresses global warming and peace talks at the climate summit.",
    ),
    (
        2,
        "India defeats Australia in a thrilling T20 World Cup final match.",
    ),
    (
        3,
        "Stock market soars as tech companies post record quarterly profits.",
    ),
    (
        4,
        "NASA launches a new satellite to explore the surface of Mars.",
    ),
];

pub fn example_text(id: u8) -> Option<&'static str> {
    EXAMPLES
        .iter()
        .find(|(key, _)| *key == id)
        .map(|(_, text)| *text)
}
