use serde::{Deserialize, Serialize};

use crate::network::error::Result;

/// One labelled example: an input vector and the desired output vector.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrainingElement {
    pub input: Vec<f64>,
    pub output: Vec<f64>,
}

impl TrainingElement {
    pub fn new(input: Vec<f64>, output: Vec<f64>) -> TrainingElement {
        TrainingElement { input, output }
    }
}

/// An ordered collection of training elements that can be stored as JSON.
///
/// The on-disk form is a plain JSON array of `{"input": [...], "output": [...]}`
/// objects.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TrainingSet {
    pub elements: Vec<TrainingElement>,
}

impl TrainingSet {
    pub fn new(elements: Vec<TrainingElement>) -> TrainingSet {
        TrainingSet { elements }
    }

    /// Samples `y = x^2 + 1` at `x_i = -1 + i / 10` for `i` in `0..points`.
    ///
    /// With 21 points this covers `[-1, 1]` in steps of 0.1.
    pub fn quadratic(points: usize) -> TrainingSet {
        let elements = (0..points)
            .map(|i| {
                let x = -1.0 + i as f64 / 10.0;
                TrainingElement::new(vec![x], vec![x * x + 1.0])
            })
            .collect();
        TrainingSet { elements }
    }

    pub fn len(&self) -> usize {
        self.elements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    pub fn into_elements(self) -> Vec<TrainingElement> {
        self.elements
    }

    /// Serializes the set to a pretty-printed JSON file.
    pub fn save_json(&self, path: &str) -> Result<()> {
        let file = std::fs::File::create(path)?;
        let writer = std::io::BufWriter::new(file);
        serde_json::to_writer_pretty(writer, self)?;
        Ok(())
    }

    /// Reads a set previously written by `save_json` (or any JSON array of
    /// `{input, output}` objects).
    pub fn load_json(path: &str) -> Result<TrainingSet> {
        let file = std::fs::File::open(path)?;
        let reader = std::io::BufReader::new(file);
        Ok(serde_json::from_reader(reader)?)
    }
}

impl From<Vec<TrainingElement>> for TrainingSet {
    fn from(elements: Vec<TrainingElement>) -> Self {
        TrainingSet { elements }
    }
}
