use std::io::{self, Write};

const BAR_WIDTH: u64 = 50;

/// Observer for download progress. Keeps console formatting out of the
/// transfer loop so the pipeline can be tested without capturing stdout.
pub trait Progress {
    /// Called after each chunk is written. `total` is the content length
    /// reported by the server.
    fn update(&mut self, downloaded: u64, total: u64);

    /// Called once after the last chunk.
    fn finish(&mut self);
}

/// Fill length and percentage for a progress bar of `BAR_WIDTH` characters.
pub fn bar_metrics(downloaded: u64, total: u64) -> (u64, u64) {
    if total == 0 {
        return (0, 0);
    }
    let done = BAR_WIDTH * downloaded / total;
    let percent = 100 * downloaded / total;
    (done, percent)
}

/// In-place textual progress bar, redrawn on the same line after each chunk.
#[derive(Default)]
pub struct ConsoleBar;

impl ConsoleBar {
    pub fn new() -> Self {
        Self
    }
}

impl Progress for ConsoleBar {
    fn update(&mut self, downloaded: u64, total: u64) {
        let (done, percent) = bar_metrics(downloaded, total);
        let done = done as usize;
        let bar = "=".repeat(done) + &" ".repeat(BAR_WIDTH as usize - done);
        print!("\r[{bar}] {percent}% ({downloaded}/{total} bytes)");
        let _ = io::stdout().flush();
    }

    fn finish(&mut self) {
        println!();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bar_metrics_floor() {
        // 33 of 100 bytes: floor(50 * 33 / 100) = 16, floor(100 * 33 / 100) = 33
        assert_eq!(bar_metrics(33, 100), (16, 33));
        // 1 of 3 bytes: floor(50 / 3) = 16, floor(100 / 3) = 33
        assert_eq!(bar_metrics(1, 3), (16, 33));
    }

    #[test]
    fn test_bar_metrics_complete() {
        assert_eq!(bar_metrics(100, 100), (50, 100));
        assert_eq!(bar_metrics(7, 7), (50, 100));
    }

    #[test]
    fn test_bar_metrics_empty() {
        assert_eq!(bar_metrics(0, 100), (0, 0));
        assert_eq!(bar_metrics(0, 0), (0, 0));
    }

    #[test]
    fn test_bar_metrics_monotonic() {
        let total = 8192 * 3 + 17;
        let mut last = (0, 0);
        for downloaded in (0..=total).step_by(1024) {
            let m = bar_metrics(downloaded, total);
            assert!(m >= last);
            assert!(m.0 <= 50 && m.1 <= 100);
            last = m;
        }
        assert_eq!(bar_metrics(total, total), (50, 100));
    }
}
