//! Plain-data exports of the atlas
//!
//! The presentation layer (image rendering, tables, whatever consumes the
//! data) is not part of this crate; these writers hand it `(board, route
//! table)` pairs in open formats that preserve the canonical indexing
//! contract.

use std::io::Write;

use crate::atlas::Atlas;

/// Write the whole atlas as pretty-printed JSON.
///
/// Boards serialize as 9-character strings; route entries as
/// `{"move": {"row", "col"}, "response": {"row", "col"}, "target"}` records.
pub fn write_json<W: Write>(atlas: &Atlas, writer: W) -> crate::Result<()> {
    serde_json::to_writer_pretty(writer, atlas)?;
    Ok(())
}

/// Write every route entry as one CSV row.
///
/// Columns: source board index, move coordinates, response coordinates, and
/// the target canonical index.
pub fn write_routes_csv<W: Write>(atlas: &Atlas, mut writer: W) -> crate::Result<()> {
    writeln!(
        writer,
        "board,move_row,move_col,response_row,response_col,target"
    )?;

    for (index, _, table) in atlas.iter() {
        for entry in table.iter() {
            writeln!(
                writer,
                "{},{},{},{},{},{}",
                index,
                entry.mv.row,
                entry.mv.col,
                entry.response.row,
                entry.response.col,
                entry.target
            )?;
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_csv_header_and_row_shape() {
        let atlas = Atlas::build().unwrap();
        let mut buffer = Vec::new();
        write_routes_csv(&atlas, &mut buffer).unwrap();

        let text = String::from_utf8(buffer).unwrap();
        let mut lines = text.lines();
        assert_eq!(
            lines.next(),
            Some("board,move_row,move_col,response_row,response_col,target")
        );

        let first = lines.next().expect("at least one route row");
        assert_eq!(first.split(',').count(), 6);

        // One data row per route entry
        assert_eq!(text.lines().count(), atlas.route_entry_count() + 1);
    }

    #[test]
    fn test_json_exposes_boards_and_routes() {
        let atlas = Atlas::build().unwrap();
        let mut buffer = Vec::new();
        write_json(&atlas, &mut buffer).unwrap();

        let value: serde_json::Value = serde_json::from_slice(&buffer).unwrap();
        let boards = value["boards"].as_array().expect("boards array");
        let routes = value["routes"].as_array().expect("routes array");
        assert_eq!(boards.len(), atlas.len());
        assert_eq!(routes.len(), atlas.len());
        assert_eq!(boards[0].as_str(), Some("........."));

        let entry = &routes[0][0];
        assert!(entry["move"]["row"].is_u64());
        assert!(entry["response"]["col"].is_u64());
        assert!(entry["target"].is_u64());
    }
}
