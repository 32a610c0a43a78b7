//! Request body for Stability AI's Stable Image Ultra endpoint
//! (`POST /v2beta/stable-image/generate/ultra`).
//!
//! Values are sent as given. Stability validates them on its side and applies
//! its own defaults for omitted fields.

use super::format::OutputFormat;
use crate::ai::multipart::{FormField, MultipartFormEncodable};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UltraRequestBody {
    prompt: String,
    aspect_ratio: Option<String>,
    negative_prompt: Option<String>,
    output_format: Option<OutputFormat>,
    seed: Option<u32>,
}

impl UltraRequestBody {
    /// What you wish to see in the output image.
    ///
    /// Word weights use `(word:weight)` with a weight between 0 and 1, e.g.
    /// `The sky was a crisp (blue:0.3) and (green:0.8)`. The prompt is passed
    /// through verbatim.
    pub fn new(prompt: impl Into<String>) -> Self {
        Self {
            prompt: prompt.into(),
            aspect_ratio: None,
            negative_prompt: None,
            output_format: None,
            seed: None,
        }
    }

    /// One of `16:9`, `1:1`, `21:9`, `2:3`, `3:2`, `4:5`, `5:4`, `9:16`, `9:21`.
    /// Stability uses `1:1` when omitted.
    pub fn with_aspect_ratio(mut self, aspect_ratio: impl Into<String>) -> Self {
        self.aspect_ratio = Some(aspect_ratio.into());
        self
    }

    /// Text describing what you do not wish to see in the output image.
    pub fn with_negative_prompt(mut self, negative_prompt: impl Into<String>) -> Self {
        self.negative_prompt = Some(negative_prompt.into());
        self
    }

    pub fn with_output_format(mut self, output_format: OutputFormat) -> Self {
        self.output_format = Some(output_format);
        self
    }

    /// Guides the randomness of the generation, in `[0, 4294967294]`.
    /// Omit it, or send `0`, to let Stability pick a random seed.
    pub fn with_seed(mut self, seed: u32) -> Self {
        self.seed = Some(seed);
        self
    }

    pub fn prompt(&self) -> &str {
        &self.prompt
    }

    pub fn aspect_ratio(&self) -> Option<&str> {
        self.aspect_ratio.as_deref()
    }

    pub fn negative_prompt(&self) -> Option<&str> {
        self.negative_prompt.as_deref()
    }

    pub fn output_format(&self) -> Option<OutputFormat> {
        self.output_format
    }

    pub fn seed(&self) -> Option<u32> {
        self.seed
    }
}

impl MultipartFormEncodable for UltraRequestBody {
    fn form_fields(&self) -> Vec<FormField> {
        [
            Some(FormField::text("prompt", self.prompt.as_str())),
            self.aspect_ratio
                .as_deref()
                .map(|ratio| FormField::text("aspect_ratio", ratio)),
            self.negative_prompt
                .as_deref()
                .map(|negative| FormField::text("negative_prompt", negative)),
            self.output_format
                .map(|format| FormField::text("output_format", format.as_str())),
            self.seed.map(|seed| FormField::text("seed", seed.to_string())),
        ]
        .into_iter()
        .flatten()
        .collect()
    }
}
