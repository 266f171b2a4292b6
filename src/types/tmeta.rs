// Copyright (c) 2018-2019  Ministerio de Fomento
//                          Instituto de Ciencias de la Construcción Eduardo Torroja (IETcc-CSIC)

// Permission is hereby granted, free of charge, to any person obtaining a copy
// of this software and associated documentation files (the "Software"), to deal
// in the Software without restriction, including without limitation the rights
// to use, copy, modify, merge, publish, distribute, sublicense, and/or sell
// copies of the Software, and to permit persons to whom the Software is
// furnished to do so, subject to the following conditions:

// The above copyright notice and this permission notice shall be included in
// all copies or substantial portions of the Software.

// THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND, EXPRESS OR
// IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF MERCHANTABILITY,
// FITNESS FOR A PARTICULAR PURPOSE AND NONINFRINGEMENT. IN NO EVENT SHALL THE
// AUTHORS OR COPYRIGHT HOLDERS BE LIABLE FOR ANY CLAIM, DAMAGES OR OTHER
// LIABILITY, WHETHER IN AN ACTION OF CONTRACT, TORT OR OTHERWISE, ARISING FROM,
// OUT OF OR IN CONNECTION WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE
// SOFTWARE.

// Author(s): Rafael Villar Burke <pachi@ietcc.csic.es>,
//            Daniel Jiménez González <dani@ietcc.csic.es>,
//            Marta Sorribes Gil <msorribes@ietcc.csic.es>

/*!
Tipos para la definición de metadatos
=====================================

- Tipo Meta y sus traits
*/

use std::fmt;
use std::str;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::AcpError;

// ==================== Metadata types

/// Metadatos del censo de edificios o de los factores de emisión
///
/// Metadata of building rosters or emissions factors
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Meta {
    /// metadata name.
    pub key: String,
    /// metadata value
    pub value: String,
}

impl Meta {
    /// Metadata constructor
    pub fn new<T, U>(key: T, value: U) -> Self
    where
        T: Into<String>,
        U: Into<String>,
    {
        Self {
            key: key.into(),
            value: value.into(),
        }
    }
}

impl fmt::Display for Meta {
    /// Textual representation of metadata.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#META {}: {}", self.key, self.value)
    }
}

impl str::FromStr for Meta {
    type Err = AcpError;

    fn from_str(s: &str) -> Result<Meta, Self::Err> {
        let s = s.trim();
        // Remove start of line with #META
        if !s.starts_with("#META") {
            return Err(AcpError::Parse {
                from: s.into(),
                into: "Meta".into(),
                desc: "missing #META prefix",
            });
        }
        let items: Vec<&str> = s[5..].splitn(2, ':').map(str::trim).collect();
        if items.len() == 2 {
            Ok(Meta::new(items[0], items[1]))
        } else {
            Err(AcpError::Parse {
                from: s.into(),
                into: "Meta".into(),
                desc: "expected #META key: value",
            })
        }
    }
}

/// Localiza y convierte las líneas de metadatos (#META) de un archivo de datos
///
/// Collects the metadata lines (#META) found in a data file
pub fn parse_metalines(s: &str) -> Result<Vec<Meta>, AcpError> {
    s.trim_start_matches('\u{feff}')
        .lines()
        .map(str::trim)
        .filter(|l| l.starts_with("#META"))
        .map(str::parse)
        .collect()
}

// == Data + Metadata Types ==

/// Trait común para gestionar metadatos
pub trait MetaVec {
    /// Get vector of metadata
    fn get_metavec(&self) -> &Vec<Meta>;

    /// Get mutable vector of metadata
    fn get_mut_metavec(&mut self) -> &mut Vec<Meta>;

    /// Check if key is included in metadata
    fn has_meta(&self, key: &str) -> bool {
        self.get_metavec().iter().any(|m| m.key == key)
    }

    /// Check if key has the given value
    fn has_meta_value(&self, key: &str, value: &str) -> bool {
        self.get_meta(key).map(|v| v == value).unwrap_or(false)
    }

    /// Get (optional) metadata value by key
    fn get_meta(&self, key: &str) -> Option<String> {
        self.get_metavec()
            .iter()
            .find(|m| m.key == key)
            .map(|v| v.value.clone())
    }

    /// Get (optional) metadata value by key as f64
    fn get_meta_f64(&self, key: &str) -> Option<f64> {
        self.get_metavec()
            .iter()
            .find(|m| m.key == key)
            .and_then(|v| f64::from_str(v.value.trim()).ok())
    }

    /// Update metadata value for key or insert new metadata.
    fn set_meta(&mut self, key: &str, value: &str) {
        let wmeta = self.get_mut_metavec();
        let metapos = wmeta.iter().position(|m| m.key == key);
        if let Some(pos) = metapos {
            wmeta[pos].value = value.to_string();
        } else {
            wmeta.push(Meta::new(key, value));
        };
    }
}

// ========================== Tests

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn tmeta() {
        let meta = Meta {
            key: "PROGRAM".to_string(),
            value: "BERDO".to_string(),
        };
        let meta2 = Meta::new("PROGRAM", "BERDO");
        let metastr = "#META PROGRAM: BERDO";
        assert_eq!(format!("{}", meta), metastr);
        assert_eq!(format!("{}", meta2), metastr);
        assert_eq!(format!("{}", metastr.parse::<Meta>().unwrap()), metastr);
    }

    #[test]
    fn tmeta_lines() {
        let text = "#META PROGRAM: BERDO
# comentario
BERDO ID,BERDO Property Type
#META FUENTE: ciudad de Boston
1,Office";
        let metas = parse_metalines(text).unwrap();
        assert_eq!(metas.len(), 2);
        assert_eq!(metas[0].key, "PROGRAM");
        assert_eq!(metas[1].value, "ciudad de Boston");
        assert!("#META clave".parse::<Meta>().is_err());
    }
}
