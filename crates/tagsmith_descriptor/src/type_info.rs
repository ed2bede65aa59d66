//! Splitting a full type name into namespace and type segments.

/// A byte range into a string owned elsewhere.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Default)]
pub struct StringSegment {
    start: usize,
    len: usize,
}

impl StringSegment {
    /// The empty segment.
    pub const EMPTY: StringSegment = StringSegment { start: 0, len: 0 };

    /// Creates a segment covering `start..start + len`.
    pub fn new(start: usize, len: usize) -> Self {
        Self { start, len }
    }

    /// Length of the segment in bytes.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Returns `true` if the segment covers nothing.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Returns the covered slice of `source`, or `""` if the range is out of
    /// bounds or does not fall on character boundaries of `source`.
    pub fn resolve<'a>(&self, source: &'a str) -> &'a str {
        self.start
            .checked_add(self.len)
            .and_then(|end| source.get(self.start..end))
            .unwrap_or("")
    }
}

/// The result of splitting a type name such as `App.Shared.Grid<App.Row>`.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub struct ParsedTypeInformation {
    /// Whether the input was a usable type name.
    pub success: bool,
    /// Everything before the last top-level `.` (`App.Shared`).
    pub namespace: StringSegment,
    /// Everything after it (`Grid<App.Row>`).
    pub type_name: StringSegment,
}

impl ParsedTypeInformation {
    const FAILED: ParsedTypeInformation = ParsedTypeInformation {
        success: false,
        namespace: StringSegment::EMPTY,
        type_name: StringSegment::EMPTY,
    };
}

/// Splits `full_name` at its last `.` outside generic argument brackets.
///
/// A name without a top-level `.` has an empty namespace. Empty input and
/// names ending in `.` fail.
pub fn parse_type_name(full_name: &str) -> ParsedTypeInformation {
    if full_name.is_empty() {
        return ParsedTypeInformation::FAILED;
    }

    let mut depth = 0usize;
    let mut last_dot = None;
    for (index, ch) in full_name.char_indices() {
        match ch {
            '<' => depth += 1,
            '>' => depth = depth.saturating_sub(1),
            '.' if depth == 0 => last_dot = Some(index),
            _ => {}
        }
    }

    match last_dot {
        None => ParsedTypeInformation {
            success: true,
            namespace: StringSegment::EMPTY,
            type_name: StringSegment::new(0, full_name.len()),
        },
        Some(dot) if dot + 1 == full_name.len() => ParsedTypeInformation::FAILED,
        Some(dot) => ParsedTypeInformation {
            success: true,
            namespace: StringSegment::new(0, dot),
            type_name: StringSegment::new(dot + 1, full_name.len() - dot - 1),
        },
    }
}
