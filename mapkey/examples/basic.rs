use anyhow::Result;
use mapkey::{find_or, find_ptr, CStrView, MapKey, Scoper, StringMap};

fn main() -> Result<()> {
    env_logger::init();
    let _done = Scoper::with_open(|| log::info!("starting"), || log::info!("done"));

    let mut inventory: StringMap<u32> = StringMap::new();
    for item in ["apple", "pear", "apple", "fig", "apple"] {
        let mk = MapKey::bind(&mut inventory, item);
        let is_new = !mk.found();
        let count = mk.value_or_insert_default();
        *count += 1;
        log::info!("{item}: {count}{}", if is_new { " (new)" } else { "" });
    }

    let none = 0;
    log::info!("pears: {}", find_or(&inventory, "pear", &none));
    log::info!("kiwis: {}", find_or(&inventory, "kiwi", &none));

    let key = CStrView::from_str_with_nul("fig\0")?;
    if let Some(figs) = find_ptr(&inventory, key.as_str()) {
        log::info!("figs via {key:?}: {figs}");
    }

    let assigned = MapKey::bind(&mut inventory, "pear").assign(10);
    log::info!("pear restocked to {} (inserted: {})", *assigned, assigned.inserted);
    Ok(())
}
