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
Cálculo de sanciones (fines)
============================

Cálculo de la sanción de cada edificio en un periodo de evaluación.

Para cada año se convierten los consumos declarados (kBtu) en emisiones
mediante los factores de emisión (kg CO2e/MBtu) y se compara el resultado
con el umbral del edificio para ese año:

- en programas por intensidad (BERDO, LL97) se compara la intensidad de
  emisiones (kg CO2e/ft2) con el umbral y el exceso se sanciona por
  superficie, `(cei - umbral) · superficie / 1000 · tasa`
- en programas por valor absoluto (BEUDO) se comparan las emisiones
  totales (t CO2e) con el umbral y el exceso se sanciona directamente,
  `(emisiones - umbral) · tasa`

La sanción del periodo se acumula sin redondear y se redondea una única
vez por edificio, al dólar entero más próximo y con empate al par.
*/

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::error::{AcpError, Result};
use crate::factors::FactorTable;
use crate::programs::Program;
use crate::roster::Roster;
use crate::types::{AggregatedFine, BuildingFailure, FineRecord, FuelType};

/// Parámetros de evaluación de un programa de cumplimiento
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FineParams {
    /// Programa de cumplimiento
    pub program: Program,
    /// Primer año del periodo de evaluación
    pub start_year: u32,
    /// Último año del periodo de evaluación (incluido)
    pub end_year: u32,
    /// Tasa de sanción por exceso de emisiones [USD/t CO2e]
    pub fine_rate: f64,
    /// Fuentes de energía consideradas en el cálculo
    pub fuels: Vec<FuelType>,
    /// Umbrales por intensidad (kg CO2e/ft2) en lugar de por valor
    /// absoluto (t CO2e)
    pub floor_area_normalized: bool,
}

/// Resultado de la evaluación de un censo de edificios
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Assessment {
    /// Parámetros de evaluación empleados
    pub params: FineParams,
    /// Sanciones por edificio
    pub fines: Vec<FineRecord>,
    /// Fallos de cálculo por edificio
    pub failures: Vec<BuildingFailure>,
}

/// Evalúa las sanciones de todos los edificios de un censo
///
/// Los fallos de cálculo de un edificio (umbral o factor no disponible)
/// no detienen la evaluación y se recogen en `Assessment::failures`.
pub fn compute_fines(
    roster: &Roster,
    factors: &FactorTable,
    params: &FineParams,
) -> Result<Assessment> {
    if params.start_year > params.end_year {
        return Err(AcpError::WrongInput(format!(
            "wrong assessment period {} - {}",
            params.start_year, params.end_year
        )));
    }

    let mut fines = Vec::new();
    let mut failures = Vec::new();
    for building in &roster.buildings {
        match building_fine(building, factors, params) {
            Ok(amount) => fines.push(FineRecord {
                id: building.id.clone(),
                category: building.category.clone(),
                amount,
            }),
            Err(error) => failures.push(BuildingFailure {
                id: building.id.clone(),
                category: building.category.clone(),
                error: error.to_string(),
            }),
        }
    }
    Ok(Assessment {
        params: params.clone(),
        fines,
        failures,
    })
}

/// Calcula la sanción acumulada de un edificio en el periodo de evaluación
///
/// Los años sin superficie declarada (o con superficie nula) no se
/// sancionan en los programas por intensidad. La falta de umbral o de
/// factor de emisión para un año del periodo es un error.
pub fn building_fine(
    building: &crate::types::BuildingRecord,
    factors: &FactorTable,
    params: &FineParams,
) -> Result<i64> {
    let mut total_fine = 0.0;
    for year in params.start_year..=params.end_year {
        let threshold = building
            .thresholds
            .get(&year)
            .copied()
            .ok_or_else(|| AcpError::MissingThreshold {
                id: building.id.clone(),
                year,
            })?;

        // Emisiones anuales, en kg CO2e (intensidad) o t CO2e (absoluto)
        let mut emissions = 0.0;
        for fuel in &params.fuels {
            let usage = match building.usage.get(fuel) {
                Some(value) => *value,
                None => continue,
            };
            let factor = factors.find(year, *fuel)?;
            if params.floor_area_normalized {
                emissions += usage / 1000.0 * factor;
            } else {
                emissions += usage / 1000.0 * factor / 1000.0;
            }
        }

        if params.floor_area_normalized {
            let area = match building.floor_area {
                Some(area) if area > 0.0 => area,
                _ => continue,
            };
            let cei = emissions / area;
            if cei > threshold {
                total_fine += ((cei - threshold) * area) / 1000.0 * params.fine_rate;
            }
        } else if emissions > threshold {
            total_fine += (emissions - threshold) * params.fine_rate;
        }
    }
    Ok(round_ties_even(total_fine))
}

/// Agrega las sanciones por tipo de uso del edificio
///
/// El resultado queda ordenado por tipo de uso. La agregación suma los
/// importes ya redondeados por edificio, de modo que evaluar un censo por
/// partes y agregar produce el mismo resultado que evaluarlo entero.
pub fn aggregate_fines(fines: &[FineRecord]) -> Vec<AggregatedFine> {
    let mut totals: BTreeMap<&str, i64> = BTreeMap::new();
    for fine in fines {
        *totals.entry(fine.category.as_str()).or_insert(0) += fine.amount;
    }
    totals
        .into_iter()
        .map(|(category, amount)| AggregatedFine {
            category: category.to_string(),
            amount,
        })
        .collect()
}

/// Redondeo al entero más próximo con empate al par
fn round_ties_even(x: f64) -> i64 {
    let floor = x.floor();
    let diff = x - floor;
    if diff > 0.5 {
        (floor + 1.0) as i64
    } else if diff < 0.5 {
        floor as i64
    } else {
        let f = floor as i64;
        if f % 2 == 0 {
            f
        } else {
            f + 1
        }
    }
}

// ========================== Tests

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::BuildingRecord;

    fn testparams() -> FineParams {
        FineParams {
            program: Program::BERDO,
            start_year: 2025,
            end_year: 2026,
            fine_rate: 234.0,
            fuels: vec![FuelType::NATURALGAS, FuelType::ELECTRICITY],
            floor_area_normalized: true,
        }
    }

    fn testfactors() -> FactorTable {
        "*, NATURALGAS, 0.25\n*, ELECTRICITY, 2.0".parse().unwrap()
    }

    #[test]
    fn rounding() {
        assert_eq!(round_ties_even(0.4), 0);
        assert_eq!(round_ties_even(0.5), 0);
        assert_eq!(round_ties_even(1.5), 2);
        assert_eq!(round_ties_even(2.5), 2);
        assert_eq!(round_ties_even(3.49), 3);
        assert_eq!(round_ties_even(3.5), 4);
        assert_eq!(round_ties_even(-0.5), 0);
        assert_eq!(round_ties_even(-1.5), -2);
    }

    #[test]
    fn intensity_fine() {
        let mut building = BuildingRecord::new("1", "Office");
        building.floor_area = Some(1000.0);
        building.usage.insert(FuelType::NATURALGAS, 50_000.0);
        building.thresholds.insert(2025, 10.0);
        building.thresholds.insert(2026, 10.0);

        // cei = 50 MBtu * 0.25 / 1000 ft2 = 0.0125 kg/ft2, por debajo del umbral
        let amount = building_fine(&building, &testfactors(), &testparams()).unwrap();
        assert_eq!(amount, 0);

        // con umbral 0.005: exceso 0.0075 kg/ft2 * 1000 ft2 = 7.5 kg -> 1.755 USD/año
        building.thresholds.insert(2025, 0.005);
        building.thresholds.insert(2026, 0.005);
        let amount = building_fine(&building, &testfactors(), &testparams()).unwrap();
        assert_eq!(amount, 4);
    }

    #[test]
    fn absolute_fine() {
        let mut params = testparams();
        params.program = Program::BEUDO;
        params.floor_area_normalized = false;
        params.start_year = 2025;
        params.end_year = 2025;

        let mut building = BuildingRecord::new("2", "Hotel");
        building.usage.insert(FuelType::ELECTRICITY, 2_000_000.0);
        // 2000 MBtu * 2.0 kg/MBtu = 4 t CO2e frente a un umbral de 1 t
        building.thresholds.insert(2025, 1.0);
        let amount = building_fine(&building, &testfactors(), &params).unwrap();
        assert_eq!(amount, 702);
    }

    #[test]
    fn skips_years_without_area() {
        let mut building = BuildingRecord::new("3", "Office");
        building.usage.insert(FuelType::NATURALGAS, 1_000_000.0);
        building.thresholds.insert(2025, 0.0);
        building.thresholds.insert(2026, 0.0);

        // sin superficie declarada no hay sanción, pero el cálculo no falla
        let amount = building_fine(&building, &testfactors(), &testparams()).unwrap();
        assert_eq!(amount, 0);

        building.floor_area = Some(0.0);
        let amount = building_fine(&building, &testfactors(), &testparams()).unwrap();
        assert_eq!(amount, 0);
    }

    #[test]
    fn compliant_years_do_not_change_the_fine() {
        let mut building = BuildingRecord::new("1", "Office");
        building.floor_area = Some(1000.0);
        building.usage.insert(FuelType::NATURALGAS, 50_000.0);
        building.thresholds.insert(2025, 0.005);
        building.thresholds.insert(2026, 10.0);

        // el año 2026 cumple el umbral y no aporta sanción
        let mut params = testparams();
        params.end_year = 2025;
        let one_year = building_fine(&building, &testfactors(), &params).unwrap();
        params.end_year = 2026;
        let two_years = building_fine(&building, &testfactors(), &params).unwrap();
        assert_eq!(one_year, 2);
        assert_eq!(one_year, two_years);
    }

    #[test]
    fn failures_do_not_stop_the_batch() {
        let mut ok = BuildingRecord::new("1", "Office");
        ok.floor_area = Some(1000.0);
        ok.usage.insert(FuelType::NATURALGAS, 50_000.0);
        ok.thresholds.insert(2025, 10.0);
        ok.thresholds.insert(2026, 10.0);

        // sin umbral para 2026
        let mut bad = BuildingRecord::new("2", "Hotel");
        bad.floor_area = Some(1000.0);
        bad.usage.insert(FuelType::NATURALGAS, 50_000.0);
        bad.thresholds.insert(2025, 10.0);

        let roster = Roster {
            rmeta: vec![],
            buildings: vec![bad, ok],
        };
        let assessment = compute_fines(&roster, &testfactors(), &testparams()).unwrap();
        assert_eq!(assessment.fines.len(), 1);
        assert_eq!(assessment.fines[0].id, "1");
        assert_eq!(assessment.failures.len(), 1);
        assert_eq!(assessment.failures[0].id, "2");
        assert!(assessment.failures[0]
            .error
            .contains("No compliance threshold"));
    }

    #[test]
    fn aggregation() {
        let fines = vec![
            FineRecord {
                id: "1".into(),
                category: "Office".into(),
                amount: 100,
            },
            FineRecord {
                id: "2".into(),
                category: "Hotel".into(),
                amount: 7,
            },
            FineRecord {
                id: "3".into(),
                category: "Office".into(),
                amount: 0,
            },
        ];
        let aggregated = aggregate_fines(&fines);
        assert_eq!(aggregated.len(), 2);
        assert_eq!(aggregated[0].category, "Hotel");
        assert_eq!(aggregated[0].amount, 7);
        assert_eq!(aggregated[1].category, "Office");
        assert_eq!(aggregated[1].amount, 100);
    }

    #[test]
    fn wrong_period() {
        let roster = Roster::default();
        let mut params = testparams();
        params.start_year = 2030;
        params.end_year = 2025;
        assert!(compute_fines(&roster, &testfactors(), &params).is_err());
    }
}
