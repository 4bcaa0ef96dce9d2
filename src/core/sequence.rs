/// Where a visible image sits relative to the centered one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Position {
    Left,
    Mid,
    Right,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SequenceEntry {
    pub source: String,
    /// Slot in the working sequence; unique per entry, so usable as a render id.
    pub key: usize,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VisibleImage<'a> {
    pub source: &'a str,
    pub key: usize,
    pub position: Position,
}

/// Two copies of `images` followed by the first `border` images once more.
pub fn working_sequence(images: &[String], border: usize) -> Vec<SequenceEntry> {
    images
        .iter()
        .chain(images)
        .chain(images.iter().take(border))
        .enumerate()
        .map(|(key, source)| SequenceEntry {
            source: source.clone(),
            key,
        })
        .collect()
}

/// Distance from the first image of the visible window to the centered one.
pub fn center_shift(display_number: usize) -> usize {
    if display_number % 2 == 0 {
        (display_number / 2).saturating_sub(1)
    } else {
        (display_number - 1) / 2
    }
}
