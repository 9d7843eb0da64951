//! Bounded block scan over the line sequence.

/// Isolate a contiguous block of lines.
///
/// A single forward scan: the first line matching `start` opens the block,
/// and the first line from there on (the opening line included) matching
/// `stop` closes it; both boundary lines are part of the block. A block
/// that never closes runs to the end of the document. Returns `None` when
/// the start marker is never found.
pub fn bounded_block(
    lines: &[&str],
    start: impl Fn(&str) -> bool,
    stop: impl Fn(&str) -> bool,
) -> Option<String> {
    let begin = lines.iter().position(|line| start(line))?;
    let end = lines[begin..]
        .iter()
        .position(|line| stop(line))
        .map(|offset| begin + offset)
        .unwrap_or(lines.len() - 1);
    Some(lines[begin..=end].join("\n"))
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    const LINES: [&str; 5] = [
        "шапка",
        "Поставщик ООО \"Ромашка\" ИНН 1234567890",
        "р/с 40702810102300012345",
        "СЧЁТ № 1 от 01.01.2025",
        "хвост",
    ];

    #[test]
    fn block_includes_both_boundary_lines() {
        let block = bounded_block(
            &LINES,
            |l| l.starts_with("Поставщик"),
            |l| l.starts_with("СЧЁТ"),
        )
        .unwrap();

        assert!(block.starts_with("Поставщик"));
        assert!(block.ends_with("СЧЁТ № 1 от 01.01.2025"));
        assert!(!block.contains("шапка"));
        assert!(!block.contains("хвост"));
    }

    #[test]
    fn unterminated_block_runs_to_end() {
        let block = bounded_block(
            &LINES,
            |l| l.starts_with("Поставщик"),
            |l| l.contains("Тел."),
        )
        .unwrap();

        assert!(block.ends_with("хвост"));
    }

    #[test]
    fn missing_start_marker_yields_none() {
        assert_eq!(
            bounded_block(&LINES, |l| l.starts_with("Покупатель"), |l| l.contains("Тел.")),
            None
        );
    }

    #[test]
    fn stop_on_the_opening_line_closes_immediately() {
        let lines = ["Покупатель ООО \"Лютик\" Тел. 123", "дальше"];
        let block = bounded_block(
            &lines,
            |l| l.starts_with("Покупатель"),
            |l| l.contains("Тел."),
        )
        .unwrap();

        assert_eq!(block, lines[0]);
    }
}
