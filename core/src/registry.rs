use crate::sink::Sink;
use crate::timer::try_measure;
use anyhow::Result;

/// A zero-argument benchmark body. Returning `Err` aborts the batch.
pub type Action = Box<dyn FnMut() -> Result<()>>;

/// A named, categorized unit of timed work.
pub struct BenchmarkEntry {
    category: String,
    title: String,
    action: Action,
}

impl BenchmarkEntry {
    pub fn category(&self) -> &str {
        &self.category
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    /// Time the action once, reporting progress to `sink`.
    fn run<S>(&mut self, sink: &mut S) -> Result<f64>
    where
        S: Sink + ?Sized,
    {
        sink.line(&format!("Running {} of {} benchmarks..", self.title, self.category));
        tracing::debug!(target: "yaso::bench", category = %self.category, title = %self.title, "start");

        let elapsed = try_measure(|| (self.action)())?;

        sink.line(&format!("Took {}ms to run the benchmark", elapsed));
        sink.line("");
        tracing::debug!(target: "yaso::bench", title = %self.title, elapsed_ms = elapsed, "done");
        Ok(elapsed)
    }
}

impl std::fmt::Debug for BenchmarkEntry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("BenchmarkEntry")
            .field("category", &self.category)
            .field("title", &self.title)
            .finish_non_exhaustive()
    }
}

/// Ordered collection of benchmark entries. Insertion order is execution order.
#[derive(Debug, Default)]
pub struct Registry {
    entries: Vec<BenchmarkEntry>,
}

impl Registry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append an entry. Duplicate (category, title) pairs are kept and run independently.
    pub fn register<F>(&mut self, category: impl Into<String>, title: impl Into<String>, action: F)
    where
        F: FnMut() -> Result<()> + 'static,
    {
        self.entries.push(BenchmarkEntry {
            category: category.into(),
            title: title.into(),
            action: Box::new(action),
        });
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn entries(&self) -> impl Iterator<Item = &BenchmarkEntry> {
        self.entries.iter()
    }

    /// Distinct categories in the order they were first registered.
    pub fn categories(&self) -> Vec<&str> {
        let mut seen: Vec<&str> = Vec::new();
        for entry in &self.entries {
            if !seen.contains(&entry.category.as_str()) {
                seen.push(&entry.category);
            }
        }
        seen
    }

    /// Run every entry in registration order, then report the time of the whole batch.
    ///
    /// The batch time wraps the loop including the per-entry output. The first
    /// failing action stops the run and its error is returned unchanged.
    pub fn run_all<S>(&mut self, sink: &mut S) -> Result<()>
    where
        S: Sink + ?Sized,
    {
        let entries = &mut self.entries;
        let count = entries.len();
        let total = try_measure(|| -> Result<()> {
            for entry in entries.iter_mut() {
                entry.run(sink)?;
            }
            Ok(())
        })?;

        sink.line(&format!("Took {}ms to run all benchmarks", total));
        sink.line("");
        tracing::info!(target: "yaso::bench", entries = count, total_ms = total, "batch finished");
        Ok(())
    }
}
