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

// Author(s): Rafael Villar Burke <pachi@ietcc.csic.es>,
//            Daniel Jiménez González <dani@ietcc.csic.es>,
//            Marta Sorribes Gil <msorribes@ietcc.csic.es>

/*!
Programas de cumplimiento (programs)
====================================

Reglas particulares de cada programa de cumplimiento de emisiones:

- BERDO (Boston): umbrales de intensidad (kg CO2e/ft2) publicados en el
  propio censo, tasa de 234 USD/t CO2e
- BEUDO (Cambridge): umbrales absolutos (t CO2e) derivados de las
  emisiones de referencia de cada edificio y de su calendario de
  reducción, tasa de 234 USD/t CO2e
- LL97 (Nueva York): umbrales de intensidad por tipo de uso, publicados
  como límites por periodo, tasa de 268 USD/t CO2e
*/

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use strum_macros::{Display, EnumString};

use crate::error::Result;
use crate::factors::FactorTable;
use crate::fines::FineParams;
use crate::roster::{Roster, RosterProfile};
use crate::summary::CityTotals;
use crate::types::{BuildingRecord, FuelType};

mod data;
pub use self::data::*;

/// Programa de cumplimiento de emisiones
#[allow(non_camel_case_types)]
#[derive(
    Debug, Copy, Clone, PartialEq, Eq, Serialize, Deserialize, Display, EnumString,
)]
pub enum Program {
    /// Building Emissions Reduction and Disclosure Ordinance (Boston)
    BERDO,
    /// Building Energy Use Disclosure Ordinance (Cambridge)
    BEUDO,
    /// Local Law 97 (Nueva York)
    LL97,
}

/// Programas de cumplimiento disponibles
pub const PROGRAMS: [Program; 3] = [Program::BERDO, Program::BEUDO, Program::LL97];

/// Configuración de un programa de cumplimiento
#[derive(Debug, Clone)]
pub struct ProgramCfg {
    /// Tasa de sanción por exceso de emisiones [USD/t CO2e]
    pub fine_rate: f64,
    /// Umbrales por intensidad (kg CO2e/ft2) en lugar de por valor
    /// absoluto (t CO2e)
    pub floor_area_normalized: bool,
    /// Fuentes de energía consideradas en el cálculo de sanciones
    pub fuels: &'static [FuelType],
}

impl Program {
    /// Configuración del programa
    pub fn cfg(&self) -> &'static ProgramCfg {
        match self {
            Program::BERDO => &BERDO_CFG,
            Program::BEUDO => &BEUDO_CFG,
            Program::LL97 => &LL97_CFG,
        }
    }

    /// Perfil de columnas del censo del programa
    pub fn profile(&self) -> &'static RosterProfile {
        match self {
            Program::BERDO => &BERDO_PROFILE,
            Program::BEUDO => &BEUDO_PROFILE,
            Program::LL97 => &LL97_PROFILE,
        }
    }

    /// Factores de emisión por defecto del programa
    pub fn factors(&self) -> Result<FactorTable> {
        match self {
            Program::BERDO => BERDO_FACTORS.parse(),
            Program::BEUDO => BEUDO_FACTORS.parse(),
            Program::LL97 => LL97_FACTORS.parse(),
        }
    }

    /// Parámetros de evaluación del programa para un periodo
    pub fn params(&self, start_year: u32, end_year: u32) -> FineParams {
        let cfg = self.cfg();
        FineParams {
            program: *self,
            start_year,
            end_year,
            fine_rate: cfg.fine_rate,
            fuels: cfg.fuels.to_vec(),
            floor_area_normalized: cfg.floor_area_normalized,
        }
    }

    /// Emisiones anuales de referencia de la ciudad, si se conocen
    pub fn city_totals(&self) -> Option<CityTotals> {
        match self {
            Program::BERDO => Some(BERDO_CITY_TOTALS),
            _ => None,
        }
    }
}

/// Emisiones de un edificio en el año base [t CO2e]
///
/// Suma las emisiones de las fuentes de energía consideradas en las
/// emisiones de referencia BEUDO, con los factores del año base.
pub fn baseline_emissions(
    building: &BuildingRecord,
    factors: &FactorTable,
    baseline_year: u32,
) -> Result<f64> {
    let mut total = 0.0;
    for fuel in BEUDO_BASELINE_FUELS.iter() {
        // las fuentes sin consumo no requieren factor
        let usage = match building.usage.get(fuel) {
            Some(value) if *value != 0.0 => *value,
            _ => continue,
        };
        total += usage / 1000.0 * factors.find(baseline_year, *fuel)? / 1000.0;
    }
    Ok(total)
}

/// Expande un calendario de reducción a umbrales anuales
///
/// Cada tramo (año inicial, año final, multiplicador) produce un umbral
/// `emisiones de referencia · multiplicador` para sus años.
pub fn expand_schedule(baseline: f64, schedule: &[(u32, u32, f64)]) -> BTreeMap<u32, f64> {
    let mut thresholds = BTreeMap::new();
    for &(from, to, multiplier) in schedule {
        for year in from..=to {
            thresholds.insert(year, baseline * multiplier);
        }
    }
    thresholds
}

/// Calcula los umbrales BEUDO de los edificios de un censo
///
/// El umbral de cada edificio parte de sus emisiones en el año base y
/// sigue el calendario de reducción que corresponde a su superficie.
/// Sustituye los umbrales que tuviese el censo.
pub fn augment_thresholds(
    roster: &mut Roster,
    factors: &FactorTable,
    baseline_year: u32,
) -> Result<()> {
    for building in &mut roster.buildings {
        let baseline = baseline_emissions(building, factors, baseline_year)?;
        let schedule = if building.floor_area.map_or(false, |a| a >= BEUDO_GFA_CUTOFF) {
            BEUDO_LARGE_SCHEDULE
        } else {
            BEUDO_SMALL_SCHEDULE
        };
        building.thresholds = expand_schedule(baseline, schedule);
    }
    Ok(())
}

/// Asigna los umbrales LL97 según el límite del tipo de uso de cada edificio
///
/// Los edificios de tipos de uso sin límite definido quedan sin umbrales
/// y la evaluación posterior los recoge como fallos.
pub fn assign_thresholds(
    roster: &mut Roster,
    limits: &[(&str, [f64; 5])],
    start_year: u32,
    end_year: u32,
) {
    for building in &mut roster.buildings {
        let limit = match limits.iter().find(|(c, _)| *c == building.category) {
            Some((_, values)) => values,
            None => continue,
        };
        for year in start_year..=end_year {
            let period = LL97_LIMIT_PERIODS
                .iter()
                .position(|&(from, to)| year >= from && year <= to);
            if let Some(idx) = period {
                building.thresholds.insert(year, limit[idx]);
            }
        }
    }
}

// ========================== Tests

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn program_names() {
        assert_eq!("BERDO".parse::<Program>().unwrap(), Program::BERDO);
        assert_eq!(format!("{}", Program::LL97), "LL97");
        assert!("BEPS".parse::<Program>().is_err());
    }

    #[test]
    fn default_factors() {
        let berdo = Program::BERDO.factors().unwrap();
        assert_eq!(berdo.fdata.len(), 35);
        assert_eq!(berdo.find(2025, FuelType::ELECTRICITY).unwrap(), 66.10);
        assert_eq!(berdo.find(2050, FuelType::ELECTRICITY).unwrap(), 7.40);
        assert_eq!(berdo.find(2037, FuelType::NATURALGAS).unwrap(), 53.11);

        let beudo = Program::BEUDO.factors().unwrap();
        assert_eq!(beudo.fdata.len(), 38);
        assert_eq!(beudo.find(2021, FuelType::ELECTRICITY).unwrap(), 75.90);

        let ll97 = Program::LL97.factors().unwrap();
        assert_eq!(ll97.fdata.len(), 37);
        assert_eq!(ll97.find(2032, FuelType::ELECTRICITY).unwrap(), 42.50);
        assert_eq!(ll97.find(2035, FuelType::DISTRICTSTEAM).unwrap(), 44.93);
    }

    #[test]
    fn baseline_and_schedules() {
        let factors: FactorTable = "2021, NATURALGAS, 10.0\n2021, ELECTRICITY, 20.0"
            .parse()
            .unwrap();
        let mut building = BuildingRecord::new("1", "Office");
        building.usage.insert(FuelType::NATURALGAS, 500_000.0);
        // 500 MBtu * 10 kg/MBtu = 5000 kg = 5 t CO2e
        let baseline = baseline_emissions(&building, &factors, 2021).unwrap();
        assert_eq!(baseline, 5.0);

        let thresholds = expand_schedule(baseline, BEUDO_LARGE_SCHEDULE);
        assert_eq!(thresholds.len(), 26);
        assert_eq!(thresholds[&2025], 4.0);
        assert_eq!(thresholds[&2030], 2.0);
        assert_eq!(thresholds[&2050], 0.0);

        let thresholds = expand_schedule(baseline, BEUDO_SMALL_SCHEDULE);
        assert_eq!(thresholds[&2025], 5.0);
        assert_eq!(thresholds[&2032], 3.0);
        assert_eq!(thresholds[&2040], 1.0);
        assert_eq!(thresholds[&2045], 0.5);
    }

    #[test]
    fn beudo_thresholds_by_size() {
        let factors: FactorTable = "2021, NATURALGAS, 10.0".parse().unwrap();
        let mut large = BuildingRecord::new("1", "Office");
        large.floor_area = Some(BEUDO_GFA_CUTOFF);
        large.usage.insert(FuelType::NATURALGAS, 100_000.0);
        let mut small = BuildingRecord::new("2", "Office");
        small.floor_area = Some(50_000.0);
        small.usage.insert(FuelType::NATURALGAS, 100_000.0);

        let mut roster = Roster {
            rmeta: vec![],
            buildings: vec![large, small],
        };
        augment_thresholds(&mut roster, &factors, 2021).unwrap();
        // 100 MBtu * 10 kg/MBtu = 1 t de referencia
        assert_eq!(roster.buildings[0].thresholds[&2025], 0.8);
        assert_eq!(roster.buildings[1].thresholds[&2025], 1.0);
        assert_eq!(roster.buildings[0].thresholds[&2035], 0.0);
        assert_eq!(roster.buildings[1].thresholds[&2035], 0.4);
    }

    #[test]
    fn ll97_thresholds_by_category() {
        let mut office = BuildingRecord::new("1", "Office");
        office.floor_area = Some(10_000.0);
        let unknown = BuildingRecord::new("2", "Palacio");

        let mut roster = Roster {
            rmeta: vec![],
            buildings: vec![office, unknown],
        };
        assign_thresholds(&mut roster, LL97_CATEGORY_LIMITS, 2024, 2050);

        let office = &roster.buildings[0];
        assert_eq!(office.thresholds[&2024], 8.46);
        assert_eq!(office.thresholds[&2029], 8.46);
        assert_eq!(office.thresholds[&2030], 4.53);
        assert_eq!(office.thresholds[&2035], 2.72);
        assert_eq!(office.thresholds[&2049], 1.36);
        assert_eq!(office.thresholds[&2050], 0.68);

        // los tipos de uso sin límite definido quedan sin umbrales
        assert!(roster.buildings[1].thresholds.is_empty());
    }
}
