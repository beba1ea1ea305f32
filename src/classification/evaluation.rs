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

use std::{fmt, io};

use crate::{classification::label::LabelSet, error::EvaluationError};

/// Quality measurements of a classification output, accumulated in a
/// confusion matrix indexed `[predicted][ground truth]`.
///
/// Per-label measurements take the label's index in the [`LabelSet`]; an
/// index outside the set yields `NaN`.
#[derive(Clone, Debug)]
pub struct Evaluation<'a> {
    labels: &'a LabelSet,
    confusion: Vec<Vec<usize>>,
}

impl<'a> Evaluation<'a> {
    pub fn new(labels: &'a LabelSet) -> Self {
        let n = labels.len();
        Evaluation {
            labels,
            confusion: vec![vec![0; n]; n],
        }
    }

    /// Instantiates an evaluation object and accumulates one batch.
    pub fn with_results(
        labels: &'a LabelSet,
        ground_truth: &[i32],
        result: &[i32],
    ) -> Result<Self, EvaluationError> {
        let mut evaluation = Self::new(labels);
        evaluation.append(ground_truth, result)?;
        Ok(evaluation)
    }

    /// Accumulates a batch of label indices. Items whose ground truth or
    /// result is `-1` are skipped. The batch is validated before any count
    /// changes.
    pub fn append(&mut self, ground_truth: &[i32], result: &[i32]) -> Result<(), EvaluationError> {
        if ground_truth.len() != result.len() {
            return Err(EvaluationError::LengthMismatch {
                ground_truth: ground_truth.len(),
                result: result.len(),
            });
        }
        let label_count = self.labels.len();
        for (item, (&gt, &res)) in ground_truth.iter().zip(result).enumerate() {
            for index in [gt, res] {
                if index < -1 || index >= label_count as i32 {
                    return Err(EvaluationError::LabelOutOfRange {
                        item,
                        index,
                        label_count,
                    });
                }
            }
        }

        for (&gt, &res) in ground_truth.iter().zip(result) {
            if gt == -1 || res == -1 {
                continue;
            }
            self.confusion[res as usize][gt as usize] += 1;
        }
        Ok(())
    }

    pub fn labels(&self) -> &LabelSet {
        self.labels
    }

    /// Items predicted as `predicted` whose ground truth is `truth`.
    pub fn confusion(&self, predicted: usize, truth: usize) -> usize {
        self.confusion
            .get(predicted)
            .and_then(|row| row.get(truth))
            .copied()
            .unwrap_or(0)
    }

    pub fn label_has_ground_truth(&self, label: usize) -> bool {
        label < self.labels.len() && self.confusion.iter().any(|row| row[label] != 0)
    }

    /// True positives over everything predicted as `label`. `NaN` when the
    /// label has no ground truth, `0` when it was never predicted.
    pub fn precision(&self, label: usize) -> f64 {
        if !self.label_has_ground_truth(label) {
            return f64::NAN;
        }
        let total: usize = self.confusion[label].iter().sum();
        if total == 0 {
            return 0.0;
        }
        self.confusion[label][label] as f64 / total as f64
    }

    /// True positives over every item whose ground truth is `label`. `NaN`
    /// when the label has no ground truth.
    pub fn recall(&self, label: usize) -> f64 {
        if !self.label_has_ground_truth(label) {
            return f64::NAN;
        }
        let total: usize = self.confusion.iter().map(|row| row[label]).sum();
        self.confusion[label][label] as f64 / total as f64
    }

    /// Harmonic mean of precision and recall; `0` when both are `0`.
    pub fn f1_score(&self, label: usize) -> f64 {
        let p = self.precision(label);
        let r = self.recall(label);
        if p == 0.0 && r == 0.0 {
            return 0.0;
        }
        2.0 * p * r / (p + r)
    }

    /// True positives over true positives, false positives and false
    /// negatives. `NaN` for a label neither present nor predicted.
    pub fn intersection_over_union(&self, label: usize) -> f64 {
        if label >= self.labels.len() {
            return f64::NAN;
        }
        let mut total = 0;
        for i in 0..self.labels.len() {
            total += self.confusion[i][label];
            if i != label {
                total += self.confusion[label][i];
            }
        }
        self.confusion[label][label] as f64 / total as f64
    }

    pub fn number_of_misclassified_items(&self) -> usize {
        self.confusion
            .iter()
            .enumerate()
            .map(|(i, row)| {
                row.iter()
                    .enumerate()
                    .filter(|(j, _)| *j != i)
                    .map(|(_, count)| count)
                    .sum::<usize>()
            })
            .sum()
    }

    pub fn number_of_items(&self) -> usize {
        self.confusion.iter().flatten().sum()
    }

    /// Correctly classified items over all counted items.
    pub fn accuracy(&self) -> f64 {
        let true_positives: usize = (0..self.labels.len()).map(|i| self.confusion[i][i]).sum();
        true_positives as f64 / self.number_of_items() as f64
    }

    /// Mean F1 score over the labels that have ground truth.
    pub fn mean_f1_score(&self) -> f64 {
        let scores: Vec<f64> = (0..self.labels.len())
            .filter(|&i| self.label_has_ground_truth(i))
            .map(|i| self.f1_score(i))
            .collect();
        scores.iter().sum::<f64>() / scores.len() as f64
    }

    /// Mean IoU over the labels whose IoU is defined.
    pub fn mean_intersection_over_union(&self) -> f64 {
        let ious: Vec<f64> = (0..self.labels.len())
            .map(|i| self.intersection_over_union(i))
            .filter(|iou| !iou.is_nan())
            .collect();
        ious.iter().sum::<f64>() / ious.len() as f64
    }

    /// Standalone HTML page with global results, per-label results and the
    /// confusion matrix.
    pub fn write_html<W: io::Write>(&self, out: &mut W) -> io::Result<()> {
        writeln!(out, "<!DOCTYPE html>")?;
        writeln!(out, "<html>")?;
        writeln!(out, "<head>")?;
        writeln!(out, "<style type=\"text/css\">")?;
        writeln!(out, "  body{{margin:40px auto; max-width:900px; line-height:1.5; color:#333}}")?;
        writeln!(out, "  h1,h2{{line-height:1.2}}")?;
        writeln!(out, "  table{{width:100%}}")?;
        writeln!(out, "  table,th,td{{border: 1px solid black; border-collapse: collapse; }}")?;
        writeln!(out, "  th,td{{padding: 5px;}}")?;
        writeln!(out, "</style>")?;
        writeln!(out, "<title>Evaluation of classification results</title>")?;
        writeln!(out, "</head>")?;
        writeln!(out, "<body>")?;
        writeln!(out, "<h1>Evaluation of classification results</h1>")?;

        writeln!(out, "<h2>Global Results</h2>")?;
        writeln!(out, "<ul>")?;
        writeln!(
            out,
            "  <li>{} misclassified item(s) out of {}</li>",
            self.number_of_misclassified_items(),
            self.number_of_items()
        )?;
        writeln!(out, "  <li>Accuracy = {}</li>", self.accuracy())?;
        writeln!(out, "  <li>Mean F1 score = {}</li>", self.mean_f1_score())?;
        writeln!(out, "  <li>Mean IoU = {}</li>", self.mean_intersection_over_union())?;
        writeln!(out, "</ul>")?;

        writeln!(out, "<h2>Detailed Results</h2>")?;
        writeln!(out, "<table>")?;
        writeln!(
            out,
            "  <tr><th>Label</th><th>Precision</th><th>Recall</th><th>F1 score</th><th>IoU</th></tr>"
        )?;
        for (i, name) in self.labels.iter().enumerate() {
            if self.label_has_ground_truth(i) {
                writeln!(
                    out,
                    "  <tr><td>{}</td><td>{}</td><td>{}</td><td>{}</td><td>{}</td></tr>",
                    name,
                    self.precision(i),
                    self.recall(i),
                    self.f1_score(i),
                    self.intersection_over_union(i)
                )?;
            } else {
                writeln!(
                    out,
                    "  <tr><td>{}</td><td><em>(no ground truth)</em></td><td></td><td></td><td></td></tr>",
                    name
                )?;
            }
        }
        writeln!(out, "</table>")?;

        writeln!(out, "<h2>Confusion Matrix</h2>")?;
        writeln!(out, "<table>")?;
        write!(out, "  <tr><th></th>")?;
        for name in self.labels.iter() {
            write!(out, "<th>{}</th>", name)?;
        }
        writeln!(out, "<th>PREDICTIONS</th></tr>")?;

        let n = self.labels.len();
        let mut sums = vec![0usize; n];
        for (i, name) in self.labels.iter().enumerate() {
            write!(out, "  <tr><td><strong>{}</strong></td>", name)?;
            for j in 0..n {
                let count = self.confusion[i][j];
                if i == j {
                    write!(out, "<td><strong>{}</strong></td>", count)?;
                } else {
                    write!(out, "<td>{}</td>", count)?;
                }
                sums[j] += count;
            }
            writeln!(out, "<td><strong>{}</strong></td></tr>", self.confusion[i].iter().sum::<usize>())?;
        }
        write!(out, "  <tr><td><strong>GROUND TRUTH</strong></td>")?;
        for sum in &sums {
            write!(out, "<td><strong>{}</strong></td>", sum)?;
        }
        writeln!(out, "<td><strong>{}</strong></td></tr>", sums.iter().sum::<usize>())?;
        writeln!(out, "</table>")?;
        writeln!(out, "</body>")?;
        writeln!(out, "</html>")
    }
}

impl fmt::Display for Evaluation<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Evaluation of classification:")?;
        writeln!(f, " * Global results:")?;
        writeln!(
            f,
            "   - {} misclassified item(s) out of {}",
            self.number_of_misclassified_items(),
            self.number_of_items()
        )?;
        writeln!(f, "   - Accuracy = {}", self.accuracy())?;
        writeln!(f, "   - Mean F1 score = {}", self.mean_f1_score())?;
        writeln!(f, "   - Mean IoU = {}", self.mean_intersection_over_union())?;
        writeln!(f, " * Detailed results:")?;
        for (i, name) in self.labels.iter().enumerate() {
            if self.label_has_ground_truth(i) {
                writeln!(
                    f,
                    "   - \"{}\": Precision = {} ; Recall = {} ; F1 score = {} ; IoU = {}",
                    name,
                    self.precision(i),
                    self.recall(i),
                    self.f1_score(i),
                    self.intersection_over_union(i)
                )?;
            } else {
                writeln!(f, "   - \"{}\": (no ground truth)", name)?;
            }
        }
        Ok(())
    }
}
