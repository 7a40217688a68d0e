use crate::types::riasec::{PercentileSet, Trait};

pub const BAR_WIDTH: usize = 40;

/// Fixed-width horizontal bar chart of the six percentiles on a 0-100 axis.
pub fn percentile_chart(percentiles: &PercentileSet) -> String {
    let mut output = String::from("RIASEC Percentile Scores\n");
    for t in Trait::ALL {
        let value = percentiles.get(t).min(100);
        let filled = (usize::from(value) * BAR_WIDTH + 50) / 100;
        output.push_str(&format!(
            "{} |{}{}| {:>3}\n",
            t.letter(),
            "#".repeat(filled),
            " ".repeat(BAR_WIDTH - filled),
            value
        ));
    }
    output
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn chart_has_one_bar_per_trait_in_canonical_order() {
        let chart = percentile_chart(&PercentileSet::from_fn(|t| match t {
            Trait::Realistic => 100,
            Trait::Artistic => 50,
            _ => 0,
        }));
        let lines = chart.lines().collect::<Vec<_>>();
        assert_eq!(lines.len(), 7);
        assert!(lines[1].starts_with(&format!("R |{}|", "#".repeat(BAR_WIDTH))));
        assert!(lines[2].starts_with(&format!("I |{}|", " ".repeat(BAR_WIDTH))));
        assert!(lines[3].contains(&"#".repeat(BAR_WIDTH / 2)));
        assert!(lines[3].ends_with(" 50"));
        assert!(lines[6].starts_with("C |"));
    }
}
