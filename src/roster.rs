// Copyright (c) 2018-2022  Ministerio de Fomento
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

// Author(s): Rafael Villar Burke <pachi@ietcc.csic.es>

/*!
Censo de edificios (roster)
===========================

Lectura del censo de edificios desde los archivos CSV publicados por los
programas de cumplimiento. Las líneas iniciales `#META clave: valor`
aportan metadatos y el resto del archivo es un CSV con encabezados.

Cada programa declara un perfil de columnas (identificador, tipo de uso,
superficie, consumos por fuente y umbrales `Threshold <año>`), de modo
que la lectura produce edificios con un modelo de datos común.
*/

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::error::{AcpError, Result};
use crate::types::{parse_metalines, BuildingRecord, FuelType, Meta, MetaVec};

/// Valores centinela que los censos usan en lugar de un consumo numérico
const USAGE_SENTINELS: [&str; 2] = ["Insufficient access", "Not Available"];

/// Perfil de columnas del censo de un programa de cumplimiento
#[derive(Debug, Copy, Clone)]
pub struct RosterProfile {
    /// Nombre del programa de cumplimiento
    pub name: &'static str,
    /// Columna con el identificador del edificio
    pub id_col: &'static str,
    /// Columna con el tipo de uso del edificio
    pub category_col: &'static str,
    /// Columna con la superficie construida [ft2]
    pub floor_area_col: &'static str,
    /// Columna con la intensidad de uso de energía declarada, si existe
    pub site_eui_col: Option<&'static str>,
    /// Columna con las emisiones declaradas, si existe
    pub ghg_col: Option<&'static str>,
    /// Fuentes de energía y nombre con el que aparecen en las columnas
    /// de consumo (`<nombre> Usage (kBtu)`)
    pub fuel_cols: &'static [(FuelType, &'static str)],
    /// Columna y valor de filtro por año de datos, si aplica
    pub data_year: Option<(&'static str, u32)>,
    /// Tipos de uso exentos, que se excluyen del censo
    pub exempt_categories: &'static [&'static str],
    /// Pares (columna, valor) cuyas filas se excluyen del censo
    pub exclude_where: &'static [(&'static str, &'static str)],
    /// Exige superficie construida declarada para incluir el edificio
    pub require_floor_area: bool,
    /// Exige intensidad de uso de energía declarada para incluir el edificio
    pub require_site_eui: bool,
}

/// Censo de edificios con sus metadatos
#[derive(Debug, Default, Clone, Serialize, Deserialize)]
pub struct Roster {
    /// Metadatos del censo
    pub rmeta: Vec<Meta>,
    /// Edificios del censo
    pub buildings: Vec<BuildingRecord>,
}

impl MetaVec for Roster {
    fn get_metavec(&self) -> &Vec<Meta> {
        &self.rmeta
    }
    fn get_mut_metavec(&mut self) -> &mut Vec<Meta> {
        &mut self.rmeta
    }
}

impl Roster {
    /// Lee el censo de un archivo CSV según el perfil de columnas del programa
    ///
    /// Se excluyen las filas sin identificador o sin tipo de uso y las
    /// filtradas por el perfil (año de datos, tipos exentos, etc.).
    /// Para identificadores repetidos se conserva la primera fila.
    pub fn from_csv(s: &str, profile: &RosterProfile) -> Result<Roster> {
        let rmeta = parse_metalines(s)?;

        let mut rdr = csv::ReaderBuilder::new()
            .comment(Some(b'#'))
            .trim(csv::Trim::All)
            .from_reader(s.trim_start_matches('\u{feff}').as_bytes());

        let headers = rdr.headers()?.clone();
        let position = |name: &str| headers.iter().position(|h| h.trim() == name);
        let required = |name: &'static str| {
            position(name).ok_or_else(|| {
                AcpError::WrongInput(format!("column not found in roster: {}", name))
            })
        };

        let id_pos = required(profile.id_col)?;
        let category_pos = required(profile.category_col)?;
        let floor_area_pos = required(profile.floor_area_col)?;
        let site_eui_pos = match profile.site_eui_col {
            Some(name) => Some(required(name)?),
            None => None,
        };
        let ghg_pos = match profile.ghg_col {
            Some(name) => Some(required(name)?),
            None => None,
        };
        let data_year_pos = match profile.data_year {
            Some((name, year)) => Some((required(name)?, year)),
            None => None,
        };
        let exclude_pos = profile
            .exclude_where
            .iter()
            .map(|&(name, value)| Ok((required(name)?, value)))
            .collect::<Result<Vec<_>>>()?;

        // Columnas de consumo presentes en este censo
        let fuel_pos: Vec<(FuelType, usize)> = profile
            .fuel_cols
            .iter()
            .filter_map(|(fuel, alias)| {
                position(&format!("{} Usage (kBtu)", alias)).map(|pos| (*fuel, pos))
            })
            .collect();

        // Columnas de umbral, con el año al que aplican ("Threshold 2050+" -> 2050)
        let threshold_pos: Vec<(usize, u32)> = headers
            .iter()
            .enumerate()
            .filter_map(|(pos, h)| {
                let h = h.trim();
                if h.starts_with("Threshold ") {
                    h["Threshold ".len()..]
                        .trim_end_matches('+')
                        .parse()
                        .ok()
                        .map(|year| (pos, year))
                } else {
                    None
                }
            })
            .collect();

        let mut seen: HashSet<String> = HashSet::new();
        let mut buildings = Vec::new();

        for result in rdr.records() {
            let record = result?;
            let cell = |pos: usize| record.get(pos).unwrap_or("").trim();

            let id = cell(id_pos);
            let category = cell(category_pos);
            if id.is_empty() || category.is_empty() {
                continue;
            }
            if profile.exempt_categories.contains(&category) {
                continue;
            }
            if exclude_pos.iter().any(|(pos, value)| cell(*pos) == *value) {
                continue;
            }
            if let Some((pos, year)) = data_year_pos {
                match parse_num(cell(pos)) {
                    Some(v) if v == f64::from(year) => (),
                    _ => continue,
                }
            }

            let floor_area = parse_num(cell(floor_area_pos));
            if profile.require_floor_area && floor_area.is_none() {
                continue;
            }
            let site_eui = site_eui_pos.and_then(|pos| parse_num(cell(pos)));
            if profile.require_site_eui && site_eui.is_none() {
                continue;
            }
            let reported_ghg = ghg_pos.and_then(|pos| parse_num(cell(pos)));

            if !seen.insert(id.to_string()) {
                continue;
            }

            let mut building = BuildingRecord::new(id, category);
            building.floor_area = floor_area;
            building.site_eui = site_eui;
            building.reported_ghg = reported_ghg;

            for &(fuel, pos) in &fuel_pos {
                let value = cell(pos);
                if USAGE_SENTINELS.contains(&value) {
                    building.usage.insert(fuel, 0.0);
                } else if let Some(v) = parse_num(value) {
                    building.usage.insert(fuel, v);
                }
            }
            for &(pos, year) in &threshold_pos {
                if let Some(v) = parse_num(cell(pos)) {
                    building.thresholds.insert(year, v);
                }
            }

            buildings.push(building);
        }

        Ok(Roster { rmeta, buildings })
    }
}

/// Convierte una celda a número, admitiendo separadores de miles
///
/// Las celdas vacías o no numéricas se devuelven como None.
fn parse_num(cell: &str) -> Option<f64> {
    let cell = cell.trim().replace(',', "");
    if cell.is_empty() {
        None
    } else {
        cell.parse().ok()
    }
}

// ========================== Tests

#[cfg(test)]
mod tests {
    use super::*;

    const TESTPROFILE: RosterProfile = RosterProfile {
        name: "BERDO",
        id_col: "BERDO ID",
        category_col: "BERDO Property Type",
        floor_area_col: "Reported Gross Floor Area (Sq Ft)",
        site_eui_col: None,
        ghg_col: None,
        fuel_cols: &[
            (FuelType::NATURALGAS, "Natural Gas"),
            (FuelType::ELECTRICITY, "Net Electricity"),
        ],
        data_year: None,
        exempt_categories: &[],
        exclude_where: &[],
        require_floor_area: false,
        require_site_eui: false,
    };

    const TESTCSV: &str = "#META PROGRAM: BERDO
#META FUENTE: censo de prueba
BERDO ID,BERDO Property Type,Reported Gross Floor Area (Sq Ft),Natural Gas Usage (kBtu),Net Electricity Usage (kBtu),Threshold 2025,Threshold 2050+
1,Office,\"25,000\",1000.5,Insufficient access,7.8,0.0
1,Office,99999,1.0,2.0,9.9,9.9
2,Multifamily Housing,50000,,250.0,5.7,
,Office,1000,1.0,2.0,1.0,1.0
3,,1000,1.0,2.0,1.0,1.0
";

    #[test]
    fn troster() {
        let roster = Roster::from_csv(TESTCSV, &TESTPROFILE).unwrap();
        assert_eq!(roster.rmeta.len(), 2);
        assert_eq!(roster.get_meta("PROGRAM").unwrap(), "BERDO");
        // filas sin identificador o tipo de uso fuera, repetidos conservan la primera
        assert_eq!(roster.buildings.len(), 2);

        let b1 = &roster.buildings[0];
        assert_eq!(b1.id, "1");
        assert_eq!(b1.floor_area, Some(25000.0));
        assert_eq!(b1.usage[&FuelType::NATURALGAS], 1000.5);
        // el valor centinela se lee como consumo nulo
        assert_eq!(b1.usage[&FuelType::ELECTRICITY], 0.0);
        assert_eq!(b1.thresholds[&2025], 7.8);
        assert_eq!(b1.thresholds[&2050], 0.0);

        let b2 = &roster.buildings[1];
        // el consumo en blanco no aparece en el mapa
        assert!(!b2.usage.contains_key(&FuelType::NATURALGAS));
        assert_eq!(b2.usage[&FuelType::ELECTRICITY], 250.0);
        assert!(!b2.thresholds.contains_key(&2050));
    }

    #[test]
    fn troster_missing_column() {
        let csv = "BERDO ID,Reported Gross Floor Area (Sq Ft)\n1,1000\n";
        assert!(Roster::from_csv(csv, &TESTPROFILE).is_err());
    }
}
