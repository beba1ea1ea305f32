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

use tracing::debug;

use crate::{
    error::IngestError,
    geometry::point::Point3,
    numeric::scalar::Scalar,
    point_set::PointSet,
};

pub const ECHO: &str = "echo";
pub const RED: &str = "red";
pub const GREEN: &str = "green";
pub const BLUE: &str = "blue";

/// One scanner sample. Colors are 16 bits per channel.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct PointRecord {
    pub position: [f64; 3],
    pub return_number: u8,
    pub color: [u16; 3],
}

/// Pull-based stream of point records.
pub trait PointRecordSource {
    /// Next record, or `None` once the source is exhausted.
    fn next_record(&mut self) -> Result<Option<PointRecord>, IngestError>;
}

impl<S: PointRecordSource + ?Sized> PointRecordSource for &mut S {
    fn next_record(&mut self) -> Result<Option<PointRecord>, IngestError> {
        (**self).next_record()
    }
}

fn channel<'s, T: Scalar>(
    set: &'s mut PointSet<T>,
    name: &'static str,
) -> Result<&'s mut [u8], IngestError> {
    set.add_property(name, 0u8);
    set.property_mut::<u8>(name)
        .ok_or(IngestError::PropertyType { name })
}

fn all_zero<T: Scalar>(set: &PointSet<T>, name: &str) -> bool {
    set.property::<u8>(name)
        .is_some_and(|values| values.iter().all(|&v| v == 0))
}

/// Appends every record of `source` to `set`, storing the return number in
/// the `echo` channel and the top 8 bits of each color component in `red`,
/// `green` and `blue`.
///
/// Afterwards `echo` is dropped if it is zero for every point of the set,
/// and the three color channels are dropped together if all of them are
/// zero everywhere. Returns the number of records read.
pub fn read_point_records<T, S>(mut source: S, set: &mut PointSet<T>) -> Result<usize, IngestError>
where
    T: Scalar,
    S: PointRecordSource,
{
    for name in [ECHO, RED, GREEN, BLUE] {
        channel(set, name)?;
    }

    let mut count = 0;
    while let Some(record) = source.next_record()? {
        let [x, y, z] = record.position;
        let index = set.insert(Point3::new(T::from_f64(x), T::from_f64(y), T::from_f64(z)));
        channel(set, ECHO)?[index] = record.return_number;
        for (name, value) in [RED, GREEN, BLUE].into_iter().zip(record.color) {
            channel(set, name)?[index] = (value >> 8) as u8;
        }
        count += 1;
    }

    if all_zero(set, ECHO) {
        debug!("dropping empty echo channel");
        set.remove_property(ECHO);
    }
    if [RED, GREEN, BLUE].iter().all(|&name| all_zero(set, name)) {
        debug!("dropping empty color channels");
        for name in [RED, GREEN, BLUE] {
            set.remove_property(name);
        }
    }

    debug!(records = count, points = set.len(), "ingested point records");
    Ok(count)
}
