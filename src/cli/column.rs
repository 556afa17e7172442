//! `todo column add|list`

use std::io::Write;

use crate::error::Result;
use crate::storage::board::BoardStore;

pub fn add(
    store: &mut BoardStore,
    out: &mut dyn Write,
    name: &str,
    position: Option<i64>,
) -> Result<()> {
    let column = store.create_column(name, position)?;
    writeln!(
        out,
        "Added column [{}] {} at position {}",
        column.id, column.name, column.position
    )?;
    Ok(())
}

pub fn list(store: &BoardStore, out: &mut dyn Write) -> Result<()> {
    for entry in store.list_board()? {
        writeln!(
            out,
            "{:>3}  {:<16} {} tasks",
            entry.column.position,
            entry.column.name,
            entry.len()
        )?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_add_then_list() {
        let mut store = BoardStore::open_in_memory().unwrap();
        let mut out = Vec::new();
        add(&mut store, &mut out, "Review", Some(1)).unwrap();
        assert_eq!(
            String::from_utf8(out).unwrap(),
            "Added column [4] Review at position 1\n"
        );

        let mut out = Vec::new();
        list(&store, &mut out).unwrap();
        let names: Vec<String> = String::from_utf8(out)
            .unwrap()
            .lines()
            .map(|l| l.split_whitespace().nth(1).unwrap().to_string())
            .collect();
        assert_eq!(names, vec!["Todo", "Review", "Doing", "Done"]);
    }

    #[test]
    fn test_duplicate_column_rejected() {
        let mut store = BoardStore::open_in_memory().unwrap();
        let mut out = Vec::new();
        assert!(add(&mut store, &mut out, "todo", None).is_err());
        assert!(out.is_empty());
    }
}
