//! Table compiler: authoring TSV → [`ScriptTable`]
//!
//! The conversion tables are authored as a spreadsheet with one row per
//! proto-letter and one column per script, exported as tab-separated
//! text. Header columns are `Name`, `<Latn`, `Latn`, then one ISO 15924
//! code per script. Each cell holds a `|`-separated cluster of
//! components:
//!
//! - `x`    maps both ways between the script and the Latin form
//! - `<x`   maps only from the script to the Latin form
//! - `>x`   maps only from the Latin form to the script
//! - `~x`   word-final allomorph of the row's to-form (also maps from)
//! - `a%b`  ligature: sequence `a` renders as `b`; non-empty `b` is also
//!          registered as a pre-composition back to `a`
//!
//! The `<Latn` column populates the global simplification table.
//!
//! Column order and row order are preserved verbatim in the compiled
//! table, since rule application order is part of the table contract.

use indexmap::IndexMap;

use crate::data::table::{RuleMap, ScriptTable, HUB};
use crate::utils::error::{DataError, DataResult};

const NAME_COL: &str = "Name";
const SIMP_COL: &str = "<Latn";

#[derive(Debug, Default)]
struct Cluster {
    to: Option<String>,
    from: Vec<String>,
    fina: Option<String>,
    liga: Option<(String, String)>,
}

fn parse_cluster(cell: &str) -> Cluster {
    let mut cluster = Cluster::default();
    for part in cell.split('|') {
        if let Some(rest) = part.strip_prefix('<') {
            cluster.from.push(rest.to_string());
        } else if let Some(rest) = part.strip_prefix('~') {
            cluster.fina = Some(rest.to_string());
            cluster.from.push(rest.to_string());
        } else if let Some(rest) = part.strip_prefix('>') {
            cluster.to = Some(rest.to_string());
        } else if let Some((seq, lig)) = part.split_once('%') {
            cluster.liga = Some((seq.to_string(), lig.to_string()));
        } else {
            cluster.from.push(part.to_string());
            cluster.to = Some(part.to_string());
        }
    }
    cluster
}

/// Compile tab-separated authoring records into a [`ScriptTable`].
pub fn compile_tsv(source: &str) -> DataResult<ScriptTable> {
    let mut reader = csv::ReaderBuilder::new()
        .delimiter(b'\t')
        .from_reader(source.as_bytes());
    let headers = reader
        .headers()
        .map_err(|e| DataError::parse(e.to_string()))?
        .clone();

    let mut latn_col = None;
    let mut simp_col = None;
    // (header index, script code) for every real script column
    let mut script_cols: Vec<(usize, String)> = Vec::new();
    for (idx, name) in headers.iter().enumerate() {
        match name {
            NAME_COL => {}
            SIMP_COL => simp_col = Some(idx),
            HUB => latn_col = Some(idx),
            _ => script_cols.push((idx, name.to_string())),
        }
    }
    let latn_col =
        latn_col.ok_or_else(|| DataError::bad_record("header lacks a 'Latn' column"))?;

    let mut ssub: IndexMap<String, IndexMap<String, RuleMap>> = IndexMap::new();
    let mut ccmp: IndexMap<String, RuleMap> = IndexMap::new();
    let mut fina: IndexMap<String, RuleMap> = IndexMap::new();
    let mut liga: IndexMap<String, RuleMap> = IndexMap::new();
    let mut simp: RuleMap = RuleMap::new();
    for (_, sc) in &script_cols {
        ssub.insert(sc.clone(), IndexMap::from([(HUB.to_string(), RuleMap::new())]));
        ccmp.insert(sc.clone(), RuleMap::new());
        fina.insert(sc.clone(), RuleMap::new());
        liga.insert(sc.clone(), RuleMap::new());
    }
    let mut hub_tables: IndexMap<String, RuleMap> = IndexMap::new();
    for (_, sc) in &script_cols {
        hub_tables.insert(sc.clone(), RuleMap::new());
    }
    ssub.insert(HUB.to_string(), hub_tables);

    for (row_no, record) in reader.records().enumerate() {
        let record = record.map_err(|e| DataError::parse(e.to_string()))?;
        let latn = record.get(latn_col).unwrap_or("");

        if let Some(col) = simp_col {
            let cell = record.get(col).unwrap_or("");
            if !cell.is_empty() {
                let cluster = parse_cluster(cell);
                if let (Some(to), false) = (cluster.to, latn.is_empty()) {
                    simp.insert(latn.to_string(), to);
                }
            }
        }

        for (col, sc) in &script_cols {
            let cell = record.get(*col).unwrap_or("");
            if cell.is_empty() {
                continue;
            }
            let cluster = parse_cluster(cell);
            if latn.is_empty() && (!cluster.from.is_empty() || cluster.to.is_some()) {
                return Err(DataError::bad_record(format!(
                    "row {} has a '{}' mapping but no Latn form",
                    row_no + 2,
                    sc
                )));
            }
            for s in &cluster.from {
                ssub[sc][HUB].insert(s.clone(), latn.to_string());
            }
            if let Some(to) = &cluster.to {
                ssub[HUB][sc].insert(latn.to_string(), to.clone());
            }
            if let (Some(form), Some(to)) = (&cluster.fina, &cluster.to) {
                fina[sc].insert(to.clone(), form.clone());
            }
            if let Some((seq, lig)) = &cluster.liga {
                liga[sc].insert(seq.clone(), lig.clone());
                if !lig.is_empty() {
                    ccmp[sc].insert(lig.clone(), seq.clone());
                }
            }
        }
    }

    Ok(ScriptTable {
        ccmp,
        ssub,
        simp,
        fina,
        liga,
    })
}
