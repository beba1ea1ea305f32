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

//! Point sets carrying typed, named per-point property channels, and
//! ingestion of scanner records into them.

pub mod ingest;
mod property_map;

use std::collections::BTreeMap;

use crate::{geometry::point::Point3, numeric::scalar::Scalar};

use property_map::{Channel, ErasedChannel};

pub use ingest::{PointRecord, PointRecordSource, read_point_records};

/// Points plus any number of named property columns. Every column always
/// holds one value per point; inserting a point appends each column's
/// default value.
#[derive(Debug)]
pub struct PointSet<T: Scalar> {
    points: Vec<Point3<T>>,
    properties: BTreeMap<String, Box<dyn ErasedChannel>>,
}

impl<T: Scalar> Default for PointSet<T> {
    fn default() -> Self {
        PointSet {
            points: Vec::new(),
            properties: BTreeMap::new(),
        }
    }
}

impl<T: Scalar> PointSet<T> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn points(&self) -> &[Point3<T>] {
        &self.points
    }

    /// Appends a point and returns its index.
    pub fn insert(&mut self, point: Point3<T>) -> usize {
        self.points.push(point);
        for channel in self.properties.values_mut() {
            channel.push_default();
        }
        self.points.len() - 1
    }

    /// Adds a property filled with `default`. Returns `false` if a property
    /// with that name already exists; the existing one is left untouched.
    pub fn add_property<V>(&mut self, name: &str, default: V) -> bool
    where
        V: Clone + Send + Sync + 'static,
    {
        if self.properties.contains_key(name) {
            return false;
        }
        let channel = Channel::filled(default, self.points.len());
        self.properties.insert(name.to_owned(), Box::new(channel));
        true
    }

    pub fn has_property(&self, name: &str) -> bool {
        self.properties.contains_key(name)
    }

    /// Values of property `name`, if it exists with value type `V`.
    pub fn property<V: 'static>(&self, name: &str) -> Option<&[V]> {
        self.properties
            .get(name)?
            .as_any()
            .downcast_ref::<Channel<V>>()
            .map(|c| c.values.as_slice())
    }

    pub fn property_mut<V: 'static>(&mut self, name: &str) -> Option<&mut [V]> {
        self.properties
            .get_mut(name)?
            .as_any_mut()
            .downcast_mut::<Channel<V>>()
            .map(|c| c.values.as_mut_slice())
    }

    /// Removes property `name`; returns whether it existed.
    pub fn remove_property(&mut self, name: &str) -> bool {
        self.properties.remove(name).is_some()
    }

    pub fn property_names(&self) -> impl Iterator<Item = &str> {
        self.properties.keys().map(String::as_str)
    }
}
