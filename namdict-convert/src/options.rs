/// Attribution banner written at the top of every converted file.
pub const DEFAULT_HEADER: [&str; 4] = [
    "# List of first names and gender from ftp://ftp.heise.de/pub/ct/listings/0717-182.zip",
    "# Copyright (c): 2007-2008: Jörg MICHAEL, Adalbert-Stifter-Str. 11, 30655 Hannover, Germany",
    "# License: GFDL-1.2-or-later",
    "###########################################################################################",
];

/// Options that control how the dataset is read and the output written.
///
/// The defaults match the published nam_dict.txt layout.
#[derive(Debug, Clone)]
pub struct ConvertOptions {
    /// Lines written before the first record.
    pub header: Vec<String>,

    /// First character of a comment line.
    pub comment_marker: char,

    /// Sort-flag value of a line that repeats an already listed name
    /// under a different sort order.
    pub continuation_marker: char,

    /// Separator between the two parts of a compound name, e.g. `Jun+Wei`.
    pub joiner: char,
}

impl Default for ConvertOptions {
    fn default() -> Self {
        Self {
            header: DEFAULT_HEADER.iter().map(|line| line.to_string()).collect(),
            comment_marker: '#',
            continuation_marker: '+',
            joiner: '+',
        }
    }
}

impl ConvertOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn header<I, S>(mut self, lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.header = lines.into_iter().map(Into::into).collect();
        self
    }

    pub fn comment_marker(mut self, marker: char) -> Self {
        self.comment_marker = marker;
        self
    }

    pub fn continuation_marker(mut self, marker: char) -> Self {
        self.continuation_marker = marker;
        self
    }

    pub fn joiner(mut self, joiner: char) -> Self {
        self.joiner = joiner;
        self
    }
}
