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
Estadísticas del censo (summary)
================================

Estadísticas descriptivas de un censo de edificios: reparto por tipo de
uso (número de edificios, superficie y emisiones declaradas), cuotas
sobre las emisiones de la ciudad y distribución de superficie o de
intensidad de uso de energía por tipo de uso.
*/

use std::cmp::Ordering;

use itertools::Itertools;
use serde::{Deserialize, Serialize};

use crate::statops::{bincounts, quantile, vecsum};
use crate::types::BuildingRecord;

/// Reparto de un tipo de uso en el censo
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CategoryAllocation {
    /// Tipo de uso del edificio
    pub category: String,
    /// Número de edificios del tipo de uso
    pub count: usize,
    /// Superficie construida declarada del tipo de uso [ft2]
    pub floor_area: f64,
    /// Emisiones declaradas del tipo de uso [t CO2e]
    pub ghg: f64,
    /// Porcentaje sobre el número total de edificios [%]
    pub pct_buildings: f64,
    /// Porcentaje sobre la superficie total [%]
    pub pct_floor_area: f64,
    /// Porcentaje sobre las emisiones totales [%]
    pub pct_ghg: f64,
}

/// Emisiones anuales de referencia de una ciudad [t CO2e]
#[derive(Debug, Copy, Clone, PartialEq, Serialize, Deserialize)]
pub struct CityTotals {
    /// Emisiones totales de la ciudad
    pub citywide: f64,
    /// Emisiones del parque de edificios
    pub building_sector: f64,
}

/// Cuota de emisiones de un tipo de uso sobre las de la ciudad
///
/// Las cuotas se expresan como fracciones (tanto por uno).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CategoryShare {
    /// Tipo de uso del edificio
    pub category: String,
    /// Cuota sobre las emisiones totales de la ciudad
    pub city_share: f64,
    /// Cuota sobre las emisiones del parque de edificios
    pub sector_share: f64,
}

/// Distribución de una magnitud en los edificios de un tipo de uso
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CategorySummary {
    /// Tipo de uso del edificio
    pub category: String,
    /// Número de edificios con valor declarado
    pub count: usize,
    /// Primer cuartil
    pub q1: f64,
    /// Mediana
    pub median: f64,
    /// Tercer cuartil
    pub q3: f64,
    /// Número de edificios por intervalo
    pub bin_counts: Vec<usize>,
}

/// Intervalos de clasificación, abiertos por la izquierda
#[derive(Debug, Copy, Clone)]
pub struct Bins {
    /// Límites de los intervalos, en orden creciente
    pub edges: &'static [f64],
    /// Etiquetas de los intervalos (una menos que límites)
    pub labels: &'static [&'static str],
}

/// Reparto del censo por tipo de uso, ordenado por tipo de uso
pub fn category_allocation(buildings: &[BuildingRecord]) -> Vec<CategoryAllocation> {
    let total_count = buildings.len() as f64;
    let total_area = vecsum(&buildings.iter().filter_map(|b| b.floor_area).collect::<Vec<_>>());
    let total_ghg = vecsum(&buildings.iter().filter_map(|b| b.reported_ghg).collect::<Vec<_>>());

    let mut sorted: Vec<&BuildingRecord> = buildings.iter().collect();
    sorted.sort_by(|a, b| a.category.cmp(&b.category));

    let mut allocation = Vec::new();
    let groups = sorted.iter().group_by(|b| b.category.clone());
    for (category, group) in &groups {
        let group: Vec<&&BuildingRecord> = group.collect();
        let count = group.len();
        let floor_area = vecsum(&group.iter().filter_map(|b| b.floor_area).collect::<Vec<_>>());
        let ghg = vecsum(&group.iter().filter_map(|b| b.reported_ghg).collect::<Vec<_>>());
        allocation.push(CategoryAllocation {
            category,
            count,
            floor_area,
            ghg,
            pct_buildings: percent(count as f64, total_count),
            pct_floor_area: percent(floor_area, total_area),
            pct_ghg: percent(ghg, total_ghg),
        });
    }
    allocation
}

/// Cuotas de emisiones por tipo de uso sobre las emisiones de la ciudad
pub fn emissions_shares(buildings: &[BuildingRecord], totals: &CityTotals) -> Vec<CategoryShare> {
    category_allocation(buildings)
        .into_iter()
        .map(|a| CategoryShare {
            category: a.category,
            city_share: fraction(a.ghg, totals.citywide),
            sector_share: fraction(a.ghg, totals.building_sector),
        })
        .collect()
}

/// Distribución por tipo de uso de una magnitud de los edificios
///
/// La magnitud se extrae de cada edificio con `value` y los edificios sin
/// valor no se contabilizan. Los cuartiles se interpolan linealmente.
pub fn category_summary<F>(
    buildings: &[BuildingRecord],
    bins: &Bins,
    value: F,
) -> Vec<CategorySummary>
where
    F: Fn(&BuildingRecord) -> Option<f64>,
{
    let mut sorted: Vec<&BuildingRecord> = buildings.iter().collect();
    sorted.sort_by(|a, b| a.category.cmp(&b.category));

    let mut summary = Vec::new();
    let groups = sorted.iter().group_by(|b| b.category.clone());
    for (category, group) in &groups {
        let mut values: Vec<f64> = group.filter_map(|b| value(b)).collect();
        values.sort_by(|a, b| a.partial_cmp(b).unwrap_or(Ordering::Equal));
        summary.push(CategorySummary {
            category,
            count: values.len(),
            q1: quantile(&values, 0.25),
            median: quantile(&values, 0.5),
            q3: quantile(&values, 0.75),
            bin_counts: bincounts(&values, bins.edges),
        });
    }
    summary
}

/// Tipos de uso significativos del censo
///
/// Conserva los tipos de uso con al menos un 2% de los edificios, un 2%
/// de la superficie y un 5% de las emisiones, ordenados de mayor a menor
/// (número de edificios, superficie, emisiones).
pub fn significant_categories(allocation: &[CategoryAllocation]) -> Vec<CategoryAllocation> {
    let mut main: Vec<CategoryAllocation> = allocation
        .iter()
        .filter(|a| a.pct_buildings >= 2.0 && a.pct_floor_area >= 2.0 && a.pct_ghg >= 5.0)
        .cloned()
        .collect();
    main.sort_by(|a, b| {
        b.count
            .cmp(&a.count)
            .then(b.floor_area.partial_cmp(&a.floor_area).unwrap_or(Ordering::Equal))
            .then(b.ghg.partial_cmp(&a.ghg).unwrap_or(Ordering::Equal))
    });
    main
}

fn percent(value: f64, total: f64) -> f64 {
    if total > 0.0 {
        value / total * 100.0
    } else {
        0.0
    }
}

fn fraction(value: f64, total: f64) -> f64 {
    if total > 0.0 {
        value / total
    } else {
        0.0
    }
}

// ========================== Tests
