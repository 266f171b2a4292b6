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
Datos de edificios (building records)
=====================================

Datos anuales declarados por cada edificio: consumos por fuente de energía,
superficie, tipo de uso y umbrales de emisiones aplicables.
*/

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::types::FuelType;

/// Datos declarados de un edificio
///
/// Los consumos se expresan en kBtu y los umbrales en la unidad
/// del programa de cumplimiento (kg CO2e/ft2 o t CO2e).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BuildingRecord {
    /// Identificador del edificio en el censo
    pub id: String,
    /// Tipo de uso del edificio (p. e. Office, Multifamily Housing)
    pub category: String,
    /// Superficie construida declarada [ft2]
    pub floor_area: Option<f64>,
    /// Consumo anual por fuente de energía [kBtu]
    ///
    /// Las fuentes sin consumo declarado no aparecen en el mapa.
    pub usage: BTreeMap<FuelType, f64>,
    /// Umbral de emisiones por año de evaluación
    pub thresholds: BTreeMap<u32, f64>,
    /// Intensidad de uso de energía declarada [kBtu/ft2]
    pub site_eui: Option<f64>,
    /// Emisiones declaradas en el informe de origen [t CO2e]
    pub reported_ghg: Option<f64>,
}

impl BuildingRecord {
    /// Constructor de un edificio sin consumos ni umbrales
    pub fn new<T, U>(id: T, category: U) -> Self
    where
        T: Into<String>,
        U: Into<String>,
    {
        Self {
            id: id.into(),
            category: category.into(),
            floor_area: None,
            usage: BTreeMap::new(),
            thresholds: BTreeMap::new(),
            site_eui: None,
            reported_ghg: None,
        }
    }
}
