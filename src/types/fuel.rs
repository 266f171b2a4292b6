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
Fuentes de energía (fuels)
==========================

Fuentes de energía consideradas en los informes de consumo de los edificios.

Las cantidades consumidas se expresan en kBtu y los factores de emisión en
kg de CO2e por MBtu.
*/

use std::fmt;
use std::str;

use serde::{Deserialize, Serialize};

use crate::error::AcpError;

/// Fuente de energía consumida por un edificio
#[allow(non_camel_case_types)]
#[derive(
    Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub enum FuelType {
    /// Grid electricity
    ELECTRICITY,
    /// Natural gas
    NATURALGAS,
    /// Fuel oil n. 1
    FUELOIL1,
    /// Fuel oil n. 2
    FUELOIL2,
    /// Fuel oil n. 4
    FUELOIL4,
    /// Fuel oil n. 5 and n. 6
    FUELOIL56,
    /// Diesel oil
    DIESEL,
    /// Kerosene
    KEROSENE,
    /// LPG - propane
    PROPANE,
    /// District steam
    DISTRICTSTEAM,
    /// District hot water
    DISTRICTHOTWATER,
    /// District chilled water
    DISTRICTCHILLEDWATER,
}

/// Fuentes de energía disponibles
pub const FUELTYPES: [FuelType; 12] = [
    FuelType::ELECTRICITY,
    FuelType::NATURALGAS,
    FuelType::FUELOIL1,
    FuelType::FUELOIL2,
    FuelType::FUELOIL4,
    FuelType::FUELOIL56,
    FuelType::DIESEL,
    FuelType::KEROSENE,
    FuelType::PROPANE,
    FuelType::DISTRICTSTEAM,
    FuelType::DISTRICTHOTWATER,
    FuelType::DISTRICTCHILLEDWATER,
];

impl str::FromStr for FuelType {
    type Err = AcpError;

    fn from_str(s: &str) -> Result<FuelType, Self::Err> {
        match s.trim() {
            "ELECTRICITY" => Ok(FuelType::ELECTRICITY),
            "Electricity" => Ok(FuelType::ELECTRICITY),
            "Net Electricity" => Ok(FuelType::ELECTRICITY),
            "NATURALGAS" => Ok(FuelType::NATURALGAS),
            "Natural Gas" => Ok(FuelType::NATURALGAS),
            "FUELOIL1" => Ok(FuelType::FUELOIL1),
            "Fuel Oil 1" => Ok(FuelType::FUELOIL1),
            "FUELOIL2" => Ok(FuelType::FUELOIL2),
            "Fuel Oil 2" => Ok(FuelType::FUELOIL2),
            "FUELOIL4" => Ok(FuelType::FUELOIL4),
            "Fuel Oil 4" => Ok(FuelType::FUELOIL4),
            "FUELOIL56" => Ok(FuelType::FUELOIL56),
            "Fuel Oil 5 and 6" => Ok(FuelType::FUELOIL56),
            "DIESEL" => Ok(FuelType::DIESEL),
            "Diesel" => Ok(FuelType::DIESEL),
            "Diesel 2" => Ok(FuelType::DIESEL),
            "KEROSENE" => Ok(FuelType::KEROSENE),
            "Kerosene" => Ok(FuelType::KEROSENE),
            "PROPANE" => Ok(FuelType::PROPANE),
            "Propane" => Ok(FuelType::PROPANE),
            "DISTRICTSTEAM" => Ok(FuelType::DISTRICTSTEAM),
            "District Steam" => Ok(FuelType::DISTRICTSTEAM),
            "DISTRICTHOTWATER" => Ok(FuelType::DISTRICTHOTWATER),
            "District Hot Water" => Ok(FuelType::DISTRICTHOTWATER),
            "DISTRICTCHILLEDWATER" => Ok(FuelType::DISTRICTCHILLEDWATER),
            "District Chilled Water" => Ok(FuelType::DISTRICTCHILLEDWATER),
            _ => Err(AcpError::FuelUnknown(s.into())),
        }
    }
}

impl std::fmt::Display for FuelType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}", self)
    }
}
