use crate::core::instance_header::InstanceHeader;
use crate::error::{BayesError, Result};
use crate::streams::arff::parser::{is_comment_or_empty, parse_header, parse_instance_values};
use std::fs::File;
use std::io::{BufRead, BufReader, Error};
use std::path::{Path, PathBuf};
use std::sync::Arc;

/// Reads an ARFF file row by row. The header is parsed on construction;
/// iteration yields the data rows as validated tokens in file column order.
#[derive(Debug)]
pub struct ArffFileStream<R: BufRead = BufReader<File>> {
    path: PathBuf,
    reader: R,
    header: Arc<InstanceHeader>,
    line_number: usize,
    finished: bool,
}

impl ArffFileStream {
    pub fn open(path: &Path, class_index: Option<usize>) -> Result<Self> {
        let file = File::open(path).map_err(|e| BayesError::from_io(path, e))?;
        ArffFileStream::from_reader(path.to_path_buf(), BufReader::new(file), class_index)
    }
}

impl<R: BufRead> ArffFileStream<R> {
    /// `path` is only used to label errors.
    pub fn from_reader(path: PathBuf, mut reader: R, class_index: Option<usize>) -> Result<Self> {
        let mut line_number = 0;
        let header = match parse_header(&mut reader, class_index, &mut line_number) {
            Ok(header) => header,
            Err(e) => return Err(parse_error(&path, line_number, e)),
        };

        Ok(ArffFileStream {
            path,
            reader,
            header: Arc::new(header),
            line_number,
            finished: false,
        })
    }

    pub fn header(&self) -> &Arc<InstanceHeader> {
        &self.header
    }

    pub fn line_number(&self) -> usize {
        self.line_number
    }

    fn next_data_line(&mut self) -> std::result::Result<Option<String>, Error> {
        let mut line = String::new();
        loop {
            line.clear();
            if self.reader.read_line(&mut line)? == 0 {
                return Ok(None);
            }
            self.line_number += 1;
            if !is_comment_or_empty(&line) {
                return Ok(Some(line.trim().to_string()));
            }
        }
    }
}

impl<R: BufRead> Iterator for ArffFileStream<R> {
    type Item = Result<Vec<String>>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.finished {
            return None;
        }

        let line = match self.next_data_line() {
            Ok(Some(line)) => line,
            Ok(None) => {
                self.finished = true;
                return None;
            }
            Err(e) => {
                self.finished = true;
                return Some(Err(BayesError::from_io(&self.path, e)));
            }
        };

        Some(
            parse_instance_values(&self.header, &line)
                .map_err(|e| parse_error(&self.path, self.line_number, e)),
        )
    }
}

fn parse_error(path: &Path, line: usize, e: Error) -> BayesError {
    BayesError::Parse {
        path: path.to_path_buf(),
        line: (line > 0).then_some(line),
        reason: e.to_string(),
    }
}
