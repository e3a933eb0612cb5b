use std::sync::{Arc, Mutex};

/// Destination for the human-readable transaction report.
///
/// Writes to stdout by default. Tests attach a shared buffer instead and read
/// the captured lines back.
#[derive(Clone, Default)]
pub struct Console {
    buffer: Option<Arc<Mutex<Vec<String>>>>,
}

impl Console {
    pub fn stdout() -> Self {
        Console { buffer: None }
    }

    pub fn with_buffer(buffer: Arc<Mutex<Vec<String>>>) -> Self {
        Console {
            buffer: Some(buffer),
        }
    }

    /// A console writing to a fresh buffer, plus a handle to that buffer.
    pub fn captured() -> (Self, Arc<Mutex<Vec<String>>>) {
        let buffer = Arc::new(Mutex::new(Vec::new()));
        (Self::with_buffer(Arc::clone(&buffer)), buffer)
    }

    pub fn line(&self, line: impl Into<String>) {
        let line = line.into();
        match &self.buffer {
            Some(buffer) => match buffer.lock() {
                Ok(mut lines) => lines.push(line),
                Err(_) => tracing::warn!("console buffer poisoned, dropping line: {}", line),
            },
            None => println!("{}", line),
        }
    }

    pub fn blank(&self) {
        self.line("");
    }
}

/// Formats a fine the way the ledger has always printed amounts: at least
/// one decimal place (`3.0`, `1.5`, `-2.0`), switching to `2.0E7` style
/// scientific notation below 10^-3 and from 10^7 upward.
pub fn format_amount(amount: f64) -> String {
    if amount.is_nan() {
        return "NaN".to_string();
    }
    if amount.is_infinite() {
        return if amount > 0.0 { "Infinity" } else { "-Infinity" }.to_string();
    }

    let magnitude = amount.abs();
    if amount == 0.0 || (1e-3..1e7).contains(&magnitude) {
        return format!("{:?}", amount);
    }

    let scientific = format!("{:e}", amount);
    match scientific.split_once('e') {
        Some((mantissa, exponent)) if mantissa.contains('.') => {
            format!("{}E{}", mantissa, exponent)
        }
        Some((mantissa, exponent)) => format!("{}.0E{}", mantissa, exponent),
        None => scientific,
    }
}
