//! Plain-text tables for terminal output.

use std::fmt::Write;

use planetoid_api::{CreatureRecord, PlayerRecord, ShowEntry};

/// A fixed-width table. Columns are as wide as their widest cell.
pub struct Table {
    headers: Vec<&'static str>,
    rows: Vec<Vec<String>>,
}

impl Table {
    pub fn new(headers: Vec<&'static str>) -> Self {
        Self {
            headers,
            rows: Vec::new(),
        }
    }

    pub fn push(&mut self, row: Vec<String>) {
        debug_assert_eq!(row.len(), self.headers.len());
        self.rows.push(row);
    }

    pub fn render(&self) -> String {
        let mut widths: Vec<usize> = self.headers.iter().map(|h| h.chars().count()).collect();
        for row in &self.rows {
            for (width, cell) in widths.iter_mut().zip(row) {
                *width = (*width).max(cell.chars().count());
            }
        }

        let mut out = String::new();
        let header: Vec<String> = self.headers.iter().map(|h| h.to_string()).collect();
        push_line(&mut out, &header, &widths);
        let rule: Vec<String> = widths.iter().map(|w| "-".repeat(*w)).collect();
        push_line(&mut out, &rule, &widths);
        for row in &self.rows {
            push_line(&mut out, row, &widths);
        }
        out
    }
}

fn push_line(out: &mut String, cells: &[String], widths: &[usize]) {
    let line: Vec<String> = cells
        .iter()
        .zip(widths)
        .map(|(cell, width)| format!("{cell:<width$}"))
        .collect();
    let _ = writeln!(out, "{}", line.join(" | ").trim_end());
}

pub fn players_table(players: &[PlayerRecord]) -> Table {
    let mut table = Table::new(vec!["#", "name"]);
    for (i, player) in players.iter().enumerate() {
        table.push(vec![(i + 1).to_string(), player.name.clone()]);
    }
    table
}

pub fn creature_summary(record: &CreatureRecord) -> String {
    let creature = &record.creature;
    let mut out = String::new();
    let _ = writeln!(out, "#{} {}", creature.number, creature.name);
    let _ = writeln!(out, "image: {}", creature.image);
    out.push('\n');

    let mut attacks = Table::new(vec!["attack", "type", "damage"]);
    for attack in &creature.attacks.special {
        attacks.push(vec![
            attack.name.clone(),
            attack.kind.clone(),
            attack.damage.to_string(),
        ]);
    }
    out.push_str(&attacks.render());
    out.push('\n');
    let _ = writeln!(out, "fetched at {}", record.fetched_at);
    out
}

pub fn series_table(entries: &[ShowEntry]) -> Table {
    let mut table = Table::new(vec!["id", "name", "url"]);
    for entry in entries {
        table.push(vec![
            entry.show.id.to_string(),
            entry.show.name.clone(),
            entry.show.url.clone(),
        ]);
    }
    table
}

#[cfg(test)]
mod tests {
    use super::*;
    use planetoid_api::pokemon::{Attack, Attacks, Creature};
    use planetoid_api::series::Show;

    #[test]
    fn test_table_pads_to_widest_cell() {
        let mut table = Table::new(vec!["id", "name"]);
        table.push(vec!["1".into(), "Breaking Bad".into()]);
        table.push(vec!["33320".into(), "Bad".into()]);
        assert_eq!(
            table.render(),
            "id    | name\n\
             ----- | ------------\n\
             1     | Breaking Bad\n\
             33320 | Bad\n"
        );
    }

    #[test]
    fn test_empty_table_has_header_only() {
        let table = players_table(&[]);
        assert_eq!(table.render(), "# | name\n- | ----\n");
    }

    #[test]
    fn test_players_table_numbers_rows() {
        let table = players_table(&[PlayerRecord::new("ripley"), PlayerRecord::new("hicks")]);
        let rendered = table.render();
        assert!(rendered.contains("1 | ripley"));
        assert!(rendered.contains("2 | hicks"));
    }

    #[test]
    fn test_series_table() {
        let entries = vec![ShowEntry {
            score: Some(0.9),
            show: Show {
                id: 169,
                name: "Breaking Bad".into(),
                url: "https://www.tvmaze.com/shows/169".into(),
                image: None,
                extra: Default::default(),
            },
            extra: Default::default(),
        }];
        let rendered = series_table(&entries).render();
        assert!(rendered.contains("169 | Breaking Bad | https://www.tvmaze.com/shows/169"));
    }

    #[test]
    fn test_creature_summary() {
        let record = CreatureRecord {
            creature: Creature {
                id: "1".into(),
                number: "025".into(),
                name: "Pikachu".into(),
                image: "url".into(),
                attacks: Attacks {
                    special: vec![Attack {
                        name: "Thunder Shock".into(),
                        kind: "Electric".into(),
                        damage: 20,
                    }],
                },
            },
            fetched_at: "9:05 03.007".into(),
        };
        let out = creature_summary(&record);
        assert!(out.starts_with("#025 Pikachu\nimage: url\n"));
        assert!(out.contains("Thunder Shock | Electric | 20"));
        assert!(out.ends_with("fetched at 9:05 03.007\n"));
    }
}
