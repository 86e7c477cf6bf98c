/// A single leaderboard entry: player name and claimed area in m².
#[derive(Debug, Clone, PartialEq)]
pub struct RankingEntry {
    pub name: String,
    pub area_m2: f64,
}

/// The mock leaderboard. There is no server: the seed entries are fixed
/// demo data and results are only held in memory, ordered by area.
#[derive(Debug, Clone)]
pub struct Leaderboard {
    entries: Vec<RankingEntry>,
}

impl Leaderboard {
    /// Seed the board with the five demo players.
    pub fn mock() -> Self {
        let seed = [
            ("Minjun", 1500.0),
            ("Seoyeon", 1320.0),
            ("Jihu", 1180.0),
            ("Yena", 1050.0),
            ("Woojin", 990.0),
        ];

        let mut board = Self {
            entries: seed
                .iter()
                .map(|&(name, area_m2)| RankingEntry {
                    name: name.to_string(),
                    area_m2,
                })
                .collect(),
        };
        board.sort();
        board
    }

    /// Record a result and keep the board ordered.
    pub fn record(&mut self, name: &str, area_m2: f64) {
        self.entries.push(RankingEntry {
            name: name.to_string(),
            area_m2,
        });
        self.sort();
    }

    /// Entries ordered by claimed area, largest first.
    pub fn entries(&self) -> &[RankingEntry] {
        &self.entries
    }

    fn sort(&mut self) {
        self.entries
            .sort_by(|a, b| b.area_m2.total_cmp(&a.area_m2));
    }
}
