use std::fs::{self, File};
use std::io::{BufRead, BufReader, BufWriter, Write};
use std::path::Path;

use anyhow::Context;

use lemtag_core::language::LanguageAnnotator;

const PROGRESS_EVERY: usize = 20;

/// Annotate every dataset line in order: one line in, one line out
pub fn annotate_file(
    dataset: &Path,
    output: &Path,
    annotator: &dyn LanguageAnnotator,
) -> anyhow::Result<()> {
    if let Some(parent) = output.parent() {
        fs::create_dir_all(parent)
            .with_context(|| format!("creating output directory {}", parent.display()))?;
    }

    let reader = BufReader::new(
        File::open(dataset).with_context(|| format!("opening dataset {}", dataset.display()))?,
    );
    let mut writer = BufWriter::new(
        File::create(output).with_context(|| format!("creating output {}", output.display()))?,
    );

    for (i, line) in reader.lines().enumerate() {
        let line = line.with_context(|| format!("reading dataset line {i}"))?;
        if i % PROGRESS_EVERY == 0 {
            tracing::info!("annotated {i} sentences");
        }
        writeln!(writer, "{}", annotator.annotate_line(&line))?;
    }

    writer.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    use std::fs;

    use lemtag_core::dictionary::{CoarseTag, WordFormTable, WordSense};
    use lemtag_lang_russian::RussianAnnotator;

    fn annotator() -> RussianAnnotator {
        let mut table = WordFormTable::new();
        table.push(
            "пошёл".to_string(),
            WordSense {
                lemma: "идти".to_string(),
                tag: CoarseTag::V,
            },
        );
        table.push(
            "магазин".to_string(),
            WordSense {
                lemma: "магазин".to_string(),
                tag: CoarseTag::S,
            },
        );
        RussianAnnotator::new(table)
    }

    #[test]
    fn writes_one_line_per_input_line() {
        let dir = tempfile::tempdir().unwrap();
        let dataset = dir.path().join("dataset.txt");
        let output = dir.path().join("out").join("output.txt");

        fs::write(&dataset, "Он пошёл в магазин.\n\nНеизвестное слово\n").unwrap();

        annotate_file(&dataset, &output, &annotator()).unwrap();

        let written = fs::read_to_string(&output).unwrap();
        assert_eq!(
            written,
            "Он{он=ADV} пошёл{идти=V} в{в=PR} магазин{магазин=S}\n\
             \n\
             Неизвестное{неизвестное=ADV} слово{слово=ADV}\n"
        );
    }

    #[test]
    fn creates_missing_output_directories() {
        let dir = tempfile::tempdir().unwrap();
        let dataset = dir.path().join("dataset.txt");
        let output = dir.path().join("a").join("b").join("output.txt");

        fs::write(&dataset, "в\n").unwrap();

        annotate_file(&dataset, &output, &annotator()).unwrap();
        assert!(output.exists());
    }

    #[test]
    fn missing_dataset_is_fatal() {
        let dir = tempfile::tempdir().unwrap();
        let dataset = dir.path().join("nope.txt");
        let output = dir.path().join("output.txt");

        assert!(annotate_file(&dataset, &output, &annotator()).is_err());
    }
}
