use anyhow::Result;
use serde::Serialize;
use std::io::Write;
use std::path::PathBuf;

pub const BANNER: &str = "🚀 Hello from Node.js!";
pub const SEPARATOR_WIDTH: usize = 30;
pub const LISTING_FALLBACK: &str = "📁 Dosya listesi alınamadı";
pub const UNKNOWN_DIR: &str = "Bilinmiyor";
pub const SUCCESS_BANNER: &str = "✅ Node.js uygulaması başarıyla çalıştı!";

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProbeReport {
    pub timestamp: String,
    pub working_dir: Option<PathBuf>,
    pub operands: (i32, i32),
    pub sum: i64,
    pub entry_count: Option<usize>,
}

impl ProbeReport {
    pub fn lines(&self) -> Vec<String> {
        let working_dir = match &self.working_dir {
            Some(path) => path.display().to_string(),
            None => UNKNOWN_DIR.to_string(),
        };

        let listing = match self.entry_count {
            Some(count) => format!("📁 Dizindeki dosya sayısı: {}", count),
            None => LISTING_FALLBACK.to_string(),
        };

        let (a, b) = self.operands;

        vec![
            BANNER.to_string(),
            "=".repeat(SEPARATOR_WIDTH),
            format!("📅 Tarih: {}", self.timestamp),
            format!("🏠 Çalışma dizini: {}", working_dir),
            format!("🧮 {} + {} = {}", a, b, self.sum),
            listing,
            String::new(),
            SUCCESS_BANNER.to_string(),
        ]
    }

    pub fn write_to<W: Write>(&self, out: &mut W) -> Result<()> {
        for line in self.lines() {
            writeln!(out, "{}", line)?;
        }
        out.flush()?;
        Ok(())
    }
}
