//! Text rendering for grids and session summaries

use crate::session::SessionStats;
use crate::spin::Grid;
use crate::symbols::SymbolSet;

/// Separator placed between reels on a rendered row
pub const REEL_DELIMITER: &str = " | ";

/// Render a grid top to bottom, reels left to right.
///
/// No trailing delimiter after the last reel and no trailing newline.
pub fn render_grid(grid: &Grid, symbols: &SymbolSet) -> String {
    (0..grid.rows())
        .map(|row| {
            grid.row(row)
                .map(|id| symbols.name_of(id))
                .collect::<Vec<_>>()
                .join(REEL_DELIMITER)
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Winning line numbers separated by spaces, e.g. `1 3`
pub fn format_lines(lines: &[usize]) -> String {
    lines
        .iter()
        .map(usize::to_string)
        .collect::<Vec<_>>()
        .join(" ")
}

/// One-line session summary
pub fn format_stats(stats: &SessionStats) -> String {
    format!(
        "{} spins ({} skipped), wagered ${}, won ${}, RTP {:.1}%, hit rate {:.1}%",
        stats.total_spins,
        stats.aborted_spins,
        stats.total_bet,
        stats.total_win,
        stats.rtp(),
        stats.hit_rate()
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_grid() {
        let grid = Grid::from_rows(&[vec![1, 1, 1], vec![2, 3, 2], vec![4, 4, 4]]).unwrap();
        let rendered = render_grid(&grid, &SymbolSet::standard());
        assert_eq!(rendered, "A | A | A\nB | C | B\nD | D | D");
    }

    #[test]
    fn test_render_single_reel_has_no_delimiter() {
        let grid = Grid::from_columns(vec![vec![1, 2]]).unwrap();
        assert_eq!(render_grid(&grid, &SymbolSet::standard()), "A\nB");
    }

    #[test]
    fn test_format_lines() {
        assert_eq!(format_lines(&[1, 3]), "1 3");
        assert_eq!(format_lines(&[]), "");
    }

    #[test]
    fn test_format_stats() {
        let stats = SessionStats {
            total_spins: 4,
            aborted_spins: 1,
            total_bet: 20,
            total_win: 10,
            wins: 1,
            losses: 3,
            max_win: 10,
        };
        assert_eq!(
            format_stats(&stats),
            "4 spins (1 skipped), wagered $20, won $10, RTP 50.0%, hit rate 25.0%"
        );
    }
}
