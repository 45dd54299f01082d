//! `.env` support on top of `dotenvy`. Variables already set in the process win.

use crate::utils::error::Result;
use std::path::Path;

pub fn parse_env_file(content: &str) -> Result<Vec<(String, String)>> {
    let pairs = dotenvy::from_read_iter(content.as_bytes())
        .collect::<std::result::Result<Vec<_>, _>>()?;
    Ok(pairs)
}

/// 載入 .env 檔案；檔案不存在時回傳 0
pub fn load_env_file<P: AsRef<Path>>(path: P) -> Result<usize> {
    let path = path.as_ref();
    if !path.exists() {
        return Ok(0);
    }

    let mut loaded = 0;
    for item in dotenvy::from_path_iter(path)? {
        let (key, value) = item?;
        if std::env::var_os(&key).is_none() {
            std::env::set_var(&key, value);
            loaded += 1;
        }
    }
    Ok(loaded)
}
