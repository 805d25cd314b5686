// Copyright 2026 Muvon Un Limited
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

use serde::de::IgnoredAny;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::error::{Error, Result};

pub(crate) const SQL_API: &str = "sql api";

/// A positional bind value; the SQL API takes every value as a string
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Binding {
    #[serde(rename = "type")]
    pub kind: &'static str,
    pub value: String,
}

impl Binding {
    pub fn text(value: impl Into<String>) -> Self {
        Self {
            kind: "TEXT",
            value: value.into(),
        }
    }

    pub fn fixed(value: u64) -> Self {
        Self {
            kind: "FIXED",
            value: value.to_string(),
        }
    }
}

/// Body of `POST /api/v2/statements`
#[derive(Debug, Serialize)]
pub struct StatementRequest<'a> {
    pub statement: &'a str,
    pub timeout: u64,
    pub database: &'a str,
    pub schema: &'a str,
    #[serde(skip_serializing_if = "str::is_empty")]
    pub warehouse: &'a str,
    #[serde(skip_serializing_if = "str::is_empty")]
    pub role: &'a str,
    #[serde(skip_serializing_if = "BTreeMap::is_empty")]
    pub bindings: BTreeMap<String, Binding>,
}

impl<'a> StatementRequest<'a> {
    /// Bindings are numbered from 1 in the order given
    pub fn with_bindings(mut self, values: Vec<Binding>) -> Self {
        self.bindings = values
            .into_iter()
            .enumerate()
            .map(|(i, binding)| ((i + 1).to_string(), binding))
            .collect();
        self
    }
}

#[derive(Debug, Deserialize)]
struct ColumnType {
    name: String,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ResultSetMetaData {
    row_type: Vec<ColumnType>,
    #[serde(default)]
    partition_info: Vec<IgnoredAny>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawStatementResponse {
    result_set_meta_data: Option<ResultSetMetaData>,
    #[serde(default)]
    data: Vec<Vec<Option<String>>>,
    statement_handle: Option<String>,
}

/// Body of `GET /api/v2/statements/{handle}?partition=N`
#[derive(Debug, Deserialize)]
struct RawPartition {
    data: Vec<Vec<Option<String>>>,
}

/// Handle of a statement the SQL API is still executing (HTTP 202)
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PendingStatement {
    pub statement_handle: String,
}

/// Completed statement with named columns
#[derive(Debug, Clone, PartialEq)]
pub struct StatementResult {
    pub columns: Vec<String>,
    pub rows: Vec<Vec<Option<String>>>,
    pub handle: Option<String>,
    /// Result partitions on the server; `rows` starts with the first only
    pub partitions: usize,
}

/// Next move after a successful SQL API response
#[derive(Debug)]
pub enum StatementStep {
    /// Still executing; poll the handle
    Pending(PendingStatement),
    Done(StatementResult),
}

impl StatementStep {
    /// HTTP 202 is an in-progress statement, any other 2xx a finished one
    pub fn from_response(status: u16, body: &str) -> Result<Self> {
        if status == 202 {
            Ok(Self::Pending(PendingStatement::parse(body)?))
        } else {
            Ok(Self::Done(StatementResult::parse(body)?))
        }
    }
}

impl StatementResult {
    pub fn parse(body: &str) -> Result<Self> {
        let raw: RawStatementResponse = serde_json::from_str(body)
            .map_err(|e| Error::malformed(SQL_API, e.to_string()))?;

        let meta = raw
            .result_set_meta_data
            .ok_or_else(|| Error::malformed(SQL_API, "missing resultSetMetaData"))?;
        let partitions = meta.partition_info.len().max(1);
        let columns: Vec<String> = meta.row_type.into_iter().map(|c| c.name).collect();
        check_row_widths(&raw.data, columns.len())?;

        Ok(Self {
            columns,
            rows: raw.data,
            handle: raw.statement_handle,
            partitions,
        })
    }

    /// Append the rows of a later partition
    pub fn append_partition(&mut self, body: &str) -> Result<()> {
        let raw: RawPartition = serde_json::from_str(body)
            .map_err(|e| Error::malformed(SQL_API, e.to_string()))?;
        check_row_widths(&raw.data, self.columns.len())?;
        self.rows.extend(raw.data);
        Ok(())
    }

    /// Index of a column, matched case-insensitively
    pub fn column_index(&self, name: &str) -> Result<usize> {
        self.columns
            .iter()
            .position(|c| c.eq_ignore_ascii_case(name))
            .ok_or_else(|| Error::malformed(SQL_API, format!("missing column {}", name)))
    }

    /// Values of one column across all rows
    pub fn column(&self, name: &str) -> Result<Vec<Option<&str>>> {
        let index = self.column_index(name)?;
        Ok(self.rows.iter().map(|row| row[index].as_deref()).collect())
    }

    /// The single non-null value of a one-row result
    pub fn scalar(&self, name: &str) -> Result<&str> {
        self.column(name)?
            .into_iter()
            .next()
            .flatten()
            .ok_or_else(|| Error::malformed(SQL_API, format!("no value in column {}", name)))
    }
}

fn check_row_widths(rows: &[Vec<Option<String>>], width: usize) -> Result<()> {
    match rows.iter().find(|row| row.len() != width) {
        Some(row) => Err(Error::malformed(
            SQL_API,
            format!(
                "row has {} values but {} columns were declared",
                row.len(),
                width
            ),
        )),
        None => Ok(()),
    }
}

impl PendingStatement {
    pub fn parse(body: &str) -> Result<Self> {
        serde_json::from_str(body).map_err(|e| Error::malformed(SQL_API, e.to_string()))
    }
}
