use std::io::BufRead;

/// The user's side of the table: one line of raw text.
#[derive(Debug)]
pub struct Human<R>
where
    R: BufRead,
{
    input: R,
}

impl<R> Human<R>
where
    R: BufRead,
{
    pub fn new(input: R) -> Self {
        Self { input }
    }
    /// Blocks for one line and strips the line terminator.
    /// Bytes that are not UTF-8 decode lossily, so they never match a choice.
    /// Returns `None` once the stream is closed.
    pub fn read(&mut self) -> anyhow::Result<Option<String>> {
        let ref mut buffer = Vec::new();
        match self.input.read_until(b'\n', buffer)? {
            0 => Ok(None),
            _ => Ok(Some(
                String::from_utf8_lossy(buffer)
                    .trim_end_matches(['\r', '\n'])
                    .to_string(),
            )),
        }
    }
}
