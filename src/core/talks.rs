use crate::domain::model::Talk;

/// Parses `talks.txt`: alternating speaker and topic lines.
///
/// Pairs with an empty line are dropped; a trailing unpaired line is ignored.
pub fn parse_talks_txt(content: &str) -> Vec<(String, String)> {
    let lines: Vec<&str> = content.trim().lines().collect();

    lines
        .chunks_exact(2)
        .filter_map(|pair| {
            let speaker = pair[0].trim();
            let topic = pair[1].trim();
            if speaker.is_empty() || topic.is_empty() {
                tracing::warn!("Skipping incomplete talk entry: {:?}", pair);
                None
            } else {
                Some((speaker.to_string(), topic.to_string()))
            }
        })
        .collect()
}

pub fn talks_from_pairs(pairs: Vec<(String, String)>, month: &str) -> Vec<Talk> {
    pairs
        .into_iter()
        .map(|(speaker, topic)| Talk {
            month: month.to_string(),
            speaker,
            topic,
        })
        .collect()
}

/// Plain-text rendering of the talks table.
pub struct TalksTable<'a> {
    talks: &'a [Talk],
}

impl<'a> TalksTable<'a> {
    const HEADERS: [&'static str; 3] = ["Month", "Speaker", "Topic"];

    pub fn new(talks: &'a [Talk]) -> Self {
        Self { talks }
    }

    pub fn render(&self) -> String {
        let mut widths = Self::HEADERS.map(|h| h.chars().count());
        for talk in self.talks {
            for (w, cell) in widths.iter_mut().zip(Self::cells(talk)) {
                *w = (*w).max(cell.chars().count());
            }
        }

        let mut lines = Vec::with_capacity(self.talks.len() + 2);
        lines.push(Self::row(&Self::HEADERS, &widths));
        lines.push(
            widths
                .iter()
                .map(|w| "-".repeat(*w))
                .collect::<Vec<_>>()
                .join("-+-"),
        );
        for talk in self.talks {
            lines.push(Self::row(&Self::cells(talk), &widths));
        }

        lines.join("\n")
    }

    fn cells(talk: &Talk) -> [&str; 3] {
        [talk.month.as_str(), talk.speaker.as_str(), talk.topic.as_str()]
    }

    fn row(cells: &[&str; 3], widths: &[usize; 3]) -> String {
        cells
            .iter()
            .zip(widths)
            .map(|(cell, w)| format!("{:<width$}", cell, width = *w))
            .collect::<Vec<_>>()
            .join(" | ")
            .trim_end()
            .to_string()
    }
}
