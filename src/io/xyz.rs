// SPDX-License-Identifier: MIT
//
// Copyright (c) 2025 Alexandre Severino
//
// Permission is hereby granted, free of charge, to any person obtaining a copy
// of this software and associated documentation files (the "Software"), to deal
// in the Software without restriction, including without limitation the rights
// to use, copy, modify, merge, publish, distribute, sublicense, and/or sell
// copies of the Software, and to permit persons to whom the Software is
// furnished to do so, subject to the following conditions:
//
// The above copyright notice and this permission notice shall be included in
// all copies or substantial portions of the Software.
//
// THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND, EXPRESS OR
// IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF MERCHANTABILITY,
// FITNESS FOR A PARTICULAR PURPOSE AND NONINFRINGEMENT. IN NO EVENT SHALL THE
// AUTHORS OR COPYRIGHT HOLDERS BE LIABLE FOR ANY CLAIM, DAMAGES OR OTHER
// LIABILITY, WHETHER IN AN ACTION OF CONTRACT, TORT OR OTHERWISE, ARISING FROM,
// OUT OF OR IN CONNECTION WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE
// SOFTWARE.

use std::io::BufRead;

use crate::{
    error::IngestError,
    point_set::{PointRecord, PointRecordSource},
};

/// Line-based ASCII point records: `x y z [return_number] [r g b]`, with
/// 16-bit color components. Blank lines and `#` comments are ignored.
pub struct XyzReader<R> {
    lines: std::io::Lines<R>,
    line: usize,
}

impl<R: BufRead> XyzReader<R> {
    pub fn new(reader: R) -> Self {
        XyzReader {
            lines: reader.lines(),
            line: 0,
        }
    }

    fn parse_record(&self, content: &str) -> Result<PointRecord, IngestError> {
        let fields: Vec<&str> = content.split_whitespace().collect();
        if !matches!(fields.len(), 3 | 4 | 6 | 7) {
            return Err(self.error(format!("expected 3, 4, 6 or 7 fields, got {}", fields.len())));
        }

        let mut record = PointRecord::default();
        for (slot, field) in record.position.iter_mut().zip(&fields[..3]) {
            *slot = field
                .parse()
                .map_err(|_| self.error(format!("bad coordinate '{}'", field)))?;
        }

        let rest = &fields[3..];
        let colors = match rest.len() {
            1 | 4 => {
                record.return_number = rest[0]
                    .parse()
                    .map_err(|_| self.error(format!("bad return number '{}'", rest[0])))?;
                &rest[1..]
            }
            _ => rest,
        };
        for (slot, field) in record.color.iter_mut().zip(colors) {
            *slot = field
                .parse()
                .map_err(|_| self.error(format!("bad color component '{}'", field)))?;
        }
        Ok(record)
    }

    fn error(&self, message: String) -> IngestError {
        IngestError::Parse {
            line: self.line,
            message,
        }
    }
}

impl<R: BufRead> PointRecordSource for XyzReader<R> {
    fn next_record(&mut self) -> Result<Option<PointRecord>, IngestError> {
        loop {
            let Some(line) = self.lines.next() else {
                return Ok(None);
            };
            let line = line?;
            self.line += 1;
            let content = line.split('#').next().unwrap_or("").trim();
            if !content.is_empty() {
                return self.parse_record(content).map(Some);
            }
        }
    }
}
