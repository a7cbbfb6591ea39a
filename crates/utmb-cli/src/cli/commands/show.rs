//! `utmb show <id>` – print one saved build field by field.

use anyhow::Result;
use utmb_core::history::HistoryRepository;

pub fn run_show(history: &HistoryRepository, id: &str) -> Result<()> {
    let Some(b) = history.get(id) else {
        anyhow::bail!("no saved build with id {id}");
    };

    println!("id:       {}", b.id);
    println!("url:      {}", b.final_url);
    println!("base:     {}", b.base_url);
    for (field, value) in b.utm_params.iter_emitted() {
        println!("{:<9} {}", format!("{}:", field.short_name()), value);
    }
    for p in &b.custom_params {
        println!("param:    {}={}", p.key, p.value);
    }
    Ok(())
}
