// Copyright (c) 2018 Ministerio de Fomento
//                    Instituto de Ciencias de la Construcción Eduardo Torroja (IETcc-CSIC)

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

// Author(s): Rafael Villar Burke <pachi@ietcc.csic.es>

/*!
Factores de emisión (emissions factors)
=======================================

Factores de conversión de energía final a emisiones de CO2e, en
kg CO2e/MBtu, con listas anotadas con metadatos.

Cada línea de datos tiene el formato:

`año, fuente, valor # comentario`

donde el año puede ser `*` para indicar un factor aplicable a
cualquier año de evaluación. En la búsqueda, un factor con año
explícito tiene prioridad sobre el factor comodín.
*/

use std::fmt;
use std::str;

use serde::{Deserialize, Serialize};

use crate::error::{AcpError, Result};
use crate::types::{FuelType, Meta, MetaVec};

/// Factor de emisión de una fuente de energía
///
/// Convierte energía final (MBtu) en emisiones (kg CO2e) para un año
/// de evaluación concreto o para cualquier año (factor comodín).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Factor {
    /// Año de evaluación al que aplica el factor (None para cualquier año)
    pub year: Option<u32>,
    /// Fuente de energía
    pub fuel: FuelType,
    /// Emisiones por unidad de energía final [kg CO2e/MBtu]
    pub value: f64,
    /// Comentario descriptivo del factor
    pub comment: String,
}

impl Factor {
    /// Constructor
    pub fn new<T: Into<String>>(year: Option<u32>, fuel: FuelType, value: f64, comment: T) -> Self {
        Self {
            year,
            fuel,
            value,
            comment: comment.into(),
        }
    }
}

impl fmt::Display for Factor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let comment = if self.comment != "" {
            format!(" # {}", self.comment)
        } else {
            "".to_owned()
        };
        let year = match self.year {
            Some(y) => format!("{}", y),
            None => "*".to_owned(),
        };
        write!(f, "{}, {}, {:.3}{}", year, self.fuel, self.value, comment)
    }
}

impl str::FromStr for Factor {
    type Err = AcpError;

    fn from_str(s: &str) -> Result<Factor> {
        let items: Vec<&str> = s.trim().splitn(2, '#').map(str::trim).collect();
        let comment = items.get(1).unwrap_or(&"").to_string();
        let items: Vec<&str> = items[0].split(',').map(str::trim).collect();
        if items.len() < 3 {
            return Err(AcpError::Parse {
                from: s.into(),
                into: "Factor".into(),
                desc: "expected year, fuel, value",
            });
        };
        let year: Option<u32> = match items[0] {
            "*" => None,
            y => Some(y.parse()?),
        };
        let fuel: FuelType = items[1].parse()?;
        let value: f64 = items[2].parse()?;
        Ok(Factor {
            year,
            fuel,
            value,
            comment,
        })
    }
}

// --------------------------- FactorTable --------------------------

/// Lista de factores de emisión con sus metadatos
#[derive(Debug, Default, Clone, Serialize, Deserialize)]
pub struct FactorTable {
    /// Metadatos de la lista de factores
    pub fmeta: Vec<Meta>,
    /// Lista de factores de emisión
    pub fdata: Vec<Factor>,
}

impl FactorTable {
    /// Localiza el factor aplicable a un año y fuente de energía
    ///
    /// Un factor con año explícito tiene prioridad sobre el factor
    /// comodín de la misma fuente.
    pub fn find(&self, year: u32, fuel: FuelType) -> Result<f64> {
        self.fdata
            .iter()
            .find(|f| f.fuel == fuel && f.year == Some(year))
            .or_else(|| {
                self.fdata
                    .iter()
                    .find(|f| f.fuel == fuel && f.year.is_none())
            })
            .map(|f| f.value)
            .ok_or(AcpError::MissingFactor { year, fuel })
    }
}

impl MetaVec for FactorTable {
    fn get_metavec(&self) -> &Vec<Meta> {
        &self.fmeta
    }
    fn get_mut_metavec(&mut self) -> &mut Vec<Meta> {
        &mut self.fmeta
    }
}

impl fmt::Display for FactorTable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let metalines = self
            .fmeta
            .iter()
            .map(|v| format!("{}", v))
            .collect::<Vec<_>>()
            .join("\n");
        let datalines = self
            .fdata
            .iter()
            .map(|v| format!("{}", v))
            .collect::<Vec<_>>()
            .join("\n");
        write!(f, "{}\n{}", metalines, datalines)
    }
}

impl str::FromStr for FactorTable {
    type Err = AcpError;

    fn from_str(s: &str) -> Result<FactorTable> {
        let lines: Vec<&str> = s.trim_start_matches('\u{feff}').lines().map(str::trim).collect();
        let metalines = lines.iter().filter(|l| l.starts_with("#META"));
        let datalines = lines
            .iter()
            .filter(|l| !(l.starts_with('#') || l.is_empty()));
        let fmeta = metalines
            .map(|e| e.parse())
            .collect::<Result<Vec<Meta>>>()?;
        let fdata = datalines
            .map(|e| e.parse())
            .collect::<Result<Vec<Factor>>>()?;
        Ok(FactorTable { fmeta, fdata })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tfactor() {
        let factor1 = Factor {
            year: None,
            fuel: "NATURALGAS".parse().unwrap(),
            value: 53.11,
            comment: "Gas natural, factor fijo".into(),
        };
        let factor1str = "*, NATURALGAS, 53.110 # Gas natural, factor fijo";
        let factor2str = "2025, ELECTRICITY, 66.100 # Electricidad de red 2025";

        assert_eq!(format!("{}", factor1), factor1str);

        // roundtrip from/to string
        assert_eq!(
            format!("{}", factor2str.parse::<Factor>().unwrap()),
            factor2str
        );
    }

    #[test]
    fn tfactortable() {
        let tablestr = "#META FUENTE: BERDO
2025, ELECTRICITY, 66.100
2026, ELECTRICITY, 63.750
*, ELECTRICITY, 10.000
*, NATURALGAS, 53.110";
        let table: FactorTable = tablestr.parse().unwrap();
        assert_eq!(table.fmeta.len(), 1);
        assert_eq!(table.fdata.len(), 4);

        // el año explícito tiene prioridad sobre el comodín
        assert_eq!(table.find(2025, FuelType::ELECTRICITY).unwrap(), 66.1);
        assert_eq!(table.find(2030, FuelType::ELECTRICITY).unwrap(), 10.0);
        assert_eq!(table.find(2030, FuelType::NATURALGAS).unwrap(), 53.11);
        assert!(table.find(2030, FuelType::PROPANE).is_err());
    }
}
