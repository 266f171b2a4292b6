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
Datos de los programas de cumplimiento
======================================

Valores publicados por cada programa: factores de emisión, límites de
intensidad por tipo de uso, calendarios de reducción, perfiles de columnas
de los censos y totales de emisiones de referencia de cada ciudad.
*/

use crate::roster::RosterProfile;
use crate::summary::{Bins, CityTotals};
use crate::types::FuelType;

use super::ProgramCfg;

/// Configuración del programa BERDO (Boston)
pub const BERDO_CFG: ProgramCfg = ProgramCfg {
    fine_rate: 234.0,
    floor_area_normalized: true,
    fuels: &BERDO_FUELS,
};

/// Configuración del programa BEUDO (Cambridge)
pub const BEUDO_CFG: ProgramCfg = ProgramCfg {
    fine_rate: 234.0,
    floor_area_normalized: false,
    fuels: &BEUDO_FUELS,
};

/// Configuración del programa LL97 (Nueva York)
pub const LL97_CFG: ProgramCfg = ProgramCfg {
    fine_rate: 268.0,
    floor_area_normalized: true,
    fuels: &LL97_FUELS,
};

/// Fuentes de energía del cálculo de sanciones BERDO
pub const BERDO_FUELS: [FuelType; 10] = [
    FuelType::NATURALGAS,
    FuelType::ELECTRICITY,
    FuelType::DISTRICTHOTWATER,
    FuelType::DISTRICTCHILLEDWATER,
    FuelType::DISTRICTSTEAM,
    FuelType::FUELOIL1,
    FuelType::FUELOIL2,
    FuelType::FUELOIL4,
    FuelType::FUELOIL56,
    FuelType::PROPANE,
];

/// Fuentes de energía del cálculo de sanciones BEUDO
pub const BEUDO_FUELS: [FuelType; 10] = BERDO_FUELS;

/// Fuentes de energía del cálculo de sanciones LL97
pub const LL97_FUELS: [FuelType; 12] = [
    FuelType::NATURALGAS,
    FuelType::ELECTRICITY,
    FuelType::DISTRICTHOTWATER,
    FuelType::DISTRICTCHILLEDWATER,
    FuelType::DISTRICTSTEAM,
    FuelType::FUELOIL1,
    FuelType::FUELOIL2,
    FuelType::FUELOIL4,
    FuelType::FUELOIL56,
    FuelType::DIESEL,
    FuelType::KEROSENE,
    FuelType::PROPANE,
];

/// Fuentes de energía de las emisiones de referencia BEUDO
pub const BEUDO_BASELINE_FUELS: [FuelType; 10] = [
    FuelType::ELECTRICITY,
    FuelType::NATURALGAS,
    FuelType::FUELOIL1,
    FuelType::FUELOIL2,
    FuelType::FUELOIL4,
    FuelType::FUELOIL56,
    FuelType::DIESEL,
    FuelType::KEROSENE,
    FuelType::DISTRICTCHILLEDWATER,
    FuelType::DISTRICTSTEAM,
];

/// Año base de las emisiones de referencia BEUDO
pub const BEUDO_BASELINE_YEAR: u32 = 2021;

/// Superficie a partir de la cual un edificio BEUDO se considera grande [ft2]
pub const BEUDO_GFA_CUTOFF: f64 = 100_000.0;

/// Calendario de reducción BEUDO para edificios grandes
///
/// Tramos (año inicial, año final, multiplicador sobre las emisiones
/// de referencia).
pub const BEUDO_LARGE_SCHEDULE: &[(u32, u32, f64)] =
    &[(2025, 2029, 0.8), (2030, 2034, 0.4), (2035, 2050, 0.0)];

/// Calendario de reducción BEUDO para edificios pequeños
pub const BEUDO_SMALL_SCHEDULE: &[(u32, u32, f64)] = &[
    (2025, 2029, 1.0),
    (2030, 2034, 0.6),
    (2035, 2039, 0.4),
    (2040, 2044, 0.2),
    (2045, 2049, 0.1),
    (2050, 2050, 0.0),
];

/// Periodos de los límites de intensidad LL97
pub const LL97_LIMIT_PERIODS: [(u32, u32); 5] = [
    (2024, 2029),
    (2030, 2034),
    (2035, 2039),
    (2040, 2049),
    (2050, 2050),
];

/// Límites de intensidad de emisiones LL97 por tipo de uso [kg CO2e/ft2]
///
/// Un valor por cada periodo de `LL97_LIMIT_PERIODS`.
pub const LL97_CATEGORY_LIMITS: &[(&str, [f64; 5])] = &[
    ("Office", [8.46, 4.53, 2.72, 1.36, 0.68]),
    ("Financial Office", [8.46, 4.53, 2.72, 1.36, 0.68]),
    ("Bank Branch", [8.46, 4.53, 2.72, 1.36, 0.68]),
    ("Medical Office", [8.46, 4.53, 2.72, 1.36, 0.68]),
    ("Data Center", [8.46, 4.53, 2.72, 1.36, 0.68]),
    ("Mixed Use Property", [8.46, 4.53, 2.72, 1.36, 0.68]),
    (
        "Urgent Care/Clinic/Other Outpatient",
        [8.46, 4.53, 2.72, 1.36, 0.68],
    ),
    ("Multifamily Housing", [6.75, 4.07, 2.44, 1.22, 0.61]),
    ("Residence Hall/Dormitory", [6.75, 4.07, 2.44, 1.22, 0.61]),
    ("Hotel", [9.87, 5.26, 3.16, 1.58, 0.79]),
    (
        "Hospital (General Medical & Surgical)",
        [23.81, 11.93, 7.16, 3.58, 1.79],
    ),
    ("Senior Care Community", [11.38, 5.98, 3.59, 1.79, 0.90]),
    ("K-12 School", [7.58, 3.44, 2.06, 1.03, 0.52]),
    ("College/University", [7.58, 3.44, 2.06, 1.03, 0.52]),
    ("Pre-school/Daycare", [7.58, 3.44, 2.06, 1.03, 0.52]),
    ("Retail Store", [11.81, 4.03, 2.42, 1.21, 0.60]),
    ("Supermarket/Grocery Store", [11.81, 4.03, 2.42, 1.21, 0.60]),
    ("Strip Mall", [11.81, 4.03, 2.42, 1.21, 0.60]),
    ("Enclosed Mall", [11.81, 4.03, 2.42, 1.21, 0.60]),
    ("Wholesale Club/Supercenter", [11.81, 4.03, 2.42, 1.21, 0.60]),
    ("Automobile Dealership", [11.81, 4.03, 2.42, 1.21, 0.60]),
    ("Restaurant", [10.74, 4.20, 2.52, 1.26, 0.63]),
    ("Bar/Nightclub", [10.74, 4.20, 2.52, 1.26, 0.63]),
    ("Social/Meeting Hall", [10.74, 4.20, 2.52, 1.26, 0.63]),
    ("Performing Arts", [10.74, 4.20, 2.52, 1.26, 0.63]),
    ("Movie Theater", [10.74, 4.20, 2.52, 1.26, 0.63]),
    ("Museum", [10.74, 4.20, 2.52, 1.26, 0.63]),
    ("Library", [10.74, 4.20, 2.52, 1.26, 0.63]),
    (
        "Fitness Center/Health Club/Gym",
        [10.74, 4.20, 2.52, 1.26, 0.63],
    ),
    (
        "Manufacturing/Industrial Plant",
        [5.74, 1.67, 1.00, 0.50, 0.25],
    ),
    ("Laboratory", [5.74, 1.67, 1.00, 0.50, 0.25]),
    ("Non-Refrigerated Warehouse", [4.26, 1.10, 0.66, 0.33, 0.17]),
    ("Refrigerated Warehouse", [4.26, 1.10, 0.66, 0.33, 0.17]),
    ("Distribution Center", [4.26, 1.10, 0.66, 0.33, 0.17]),
    ("Self-Storage Facility", [4.26, 1.10, 0.66, 0.33, 0.17]),
    ("Parking", [4.26, 1.10, 0.66, 0.33, 0.17]),
];

/// Factores de emisión BERDO [kg CO2e/MBtu]
///
/// La electricidad de red se descarboniza año a año y el resto de
/// fuentes mantiene un factor fijo.
pub const BERDO_FACTORS: &str = "#META PROGRAM: BERDO
#META FUENTE: City of Boston, factores de emision BERDO
*, NATURALGAS, 53.11
*, FUELOIL1, 73.25
*, FUELOIL2, 73.96
*, FUELOIL4, 75.04
*, FUELOIL56, 75.10
*, PROPANE, 62.87
*, DISTRICTSTEAM, 66.40
*, DISTRICTHOTWATER, 66.40
*, DISTRICTCHILLEDWATER, 52.70
2025, ELECTRICITY, 66.10
2026, ELECTRICITY, 63.75
2027, ELECTRICITY, 61.40
2028, ELECTRICITY, 59.06
2029, ELECTRICITY, 56.71
2030, ELECTRICITY, 54.36
2031, ELECTRICITY, 52.01
2032, ELECTRICITY, 49.66
2033, ELECTRICITY, 47.32
2034, ELECTRICITY, 44.97
2035, ELECTRICITY, 42.62
2036, ELECTRICITY, 40.27
2037, ELECTRICITY, 37.92
2038, ELECTRICITY, 35.58
2039, ELECTRICITY, 33.23
2040, ELECTRICITY, 30.88
2041, ELECTRICITY, 28.53
2042, ELECTRICITY, 26.18
2043, ELECTRICITY, 23.84
2044, ELECTRICITY, 21.49
2045, ELECTRICITY, 19.14
2046, ELECTRICITY, 16.79
2047, ELECTRICITY, 14.44
2048, ELECTRICITY, 12.10
2049, ELECTRICITY, 9.75
2050, ELECTRICITY, 7.40
";

/// Factores de emisión BEUDO [kg CO2e/MBtu]
///
/// Incluye el factor de electricidad del año base 2021, empleado en el
/// cálculo de las emisiones de referencia.
pub const BEUDO_FACTORS: &str = "#META PROGRAM: BEUDO
#META FUENTE: City of Cambridge, factores de emision BEUDO
*, NATURALGAS, 53.11
*, FUELOIL1, 73.25
*, FUELOIL2, 73.96
*, FUELOIL4, 75.04
*, FUELOIL56, 75.10
*, DIESEL, 73.96
*, KEROSENE, 75.20
*, PROPANE, 62.87
*, DISTRICTSTEAM, 66.40
*, DISTRICTHOTWATER, 66.40
*, DISTRICTCHILLEDWATER, 52.70
2021, ELECTRICITY, 75.90
2025, ELECTRICITY, 65.30
2026, ELECTRICITY, 62.96
2027, ELECTRICITY, 60.62
2028, ELECTRICITY, 58.28
2029, ELECTRICITY, 55.94
2030, ELECTRICITY, 53.60
2031, ELECTRICITY, 51.26
2032, ELECTRICITY, 48.92
2033, ELECTRICITY, 46.58
2034, ELECTRICITY, 44.24
2035, ELECTRICITY, 41.90
2036, ELECTRICITY, 39.56
2037, ELECTRICITY, 37.22
2038, ELECTRICITY, 34.88
2039, ELECTRICITY, 32.54
2040, ELECTRICITY, 30.20
2041, ELECTRICITY, 27.86
2042, ELECTRICITY, 25.52
2043, ELECTRICITY, 23.18
2044, ELECTRICITY, 20.84
2045, ELECTRICITY, 18.50
2046, ELECTRICITY, 16.16
2047, ELECTRICITY, 13.82
2048, ELECTRICITY, 11.48
2049, ELECTRICITY, 9.14
2050, ELECTRICITY, 6.80
";

/// Factores de emisión LL97 [kg CO2e/MBtu]
pub const LL97_FACTORS: &str = "#META PROGRAM: LL97
#META FUENTE: City of New York, factores de emision LL97/LL84
*, NATURALGAS, 53.11
*, FUELOIL1, 73.25
*, FUELOIL2, 74.21
*, FUELOIL4, 75.29
*, FUELOIL56, 75.10
*, DIESEL, 74.21
*, KEROSENE, 75.20
*, PROPANE, 64.25
*, DISTRICTSTEAM, 44.93
*, DISTRICTHOTWATER, 44.93
*, DISTRICTCHILLEDWATER, 52.70
2025, ELECTRICITY, 84.69
2026, ELECTRICITY, 84.69
2027, ELECTRICITY, 84.69
2028, ELECTRICITY, 84.69
2029, ELECTRICITY, 84.69
2030, ELECTRICITY, 42.50
2031, ELECTRICITY, 42.50
2032, ELECTRICITY, 42.50
2033, ELECTRICITY, 42.50
2034, ELECTRICITY, 42.50
2035, ELECTRICITY, 38.00
2036, ELECTRICITY, 35.87
2037, ELECTRICITY, 33.73
2038, ELECTRICITY, 31.60
2039, ELECTRICITY, 29.47
2040, ELECTRICITY, 27.33
2041, ELECTRICITY, 25.20
2042, ELECTRICITY, 23.07
2043, ELECTRICITY, 20.93
2044, ELECTRICITY, 18.80
2045, ELECTRICITY, 16.67
2046, ELECTRICITY, 14.53
2047, ELECTRICITY, 12.40
2048, ELECTRICITY, 10.27
2049, ELECTRICITY, 8.13
2050, ELECTRICITY, 6.00
";

/// Perfil de columnas del censo BERDO
pub const BERDO_PROFILE: RosterProfile = RosterProfile {
    name: "BERDO",
    id_col: "BERDO ID",
    category_col: "BERDO Property Type",
    floor_area_col: "Reported Gross Floor Area (Sq Ft)",
    site_eui_col: Some("Site EUI (Energy Use Intensity kBtu/ft2)"),
    ghg_col: Some("Total GHG Emissions (MT CO2e)"),
    fuel_cols: &[
        (FuelType::NATURALGAS, "Natural Gas"),
        (FuelType::ELECTRICITY, "Net Electricity"),
        (FuelType::DISTRICTHOTWATER, "District Hot Water"),
        (FuelType::DISTRICTCHILLEDWATER, "District Chilled Water"),
        (FuelType::DISTRICTSTEAM, "District Steam"),
        (FuelType::FUELOIL1, "Fuel Oil 1"),
        (FuelType::FUELOIL2, "Fuel Oil 2"),
        (FuelType::FUELOIL4, "Fuel Oil 4"),
        (FuelType::FUELOIL56, "Fuel Oil 5 and 6"),
        (FuelType::PROPANE, "Propane"),
    ],
    data_year: None,
    exempt_categories: &[],
    exclude_where: &[],
    require_floor_area: false,
    require_site_eui: false,
};

/// Perfil de columnas del censo BEUDO
///
/// Se conservan las filas del año de datos 2021, con superficie declarada
/// y de categoría BEUDO no residencial.
pub const BEUDO_PROFILE: RosterProfile = RosterProfile {
    name: "BEUDO",
    id_col: "Reporting ID",
    category_col: "Primary Property Type - Self Selected",
    floor_area_col: "Property GFA - Self Reported (ft2)",
    site_eui_col: None,
    ghg_col: None,
    fuel_cols: &[
        (FuelType::NATURALGAS, "Natural Gas"),
        (FuelType::ELECTRICITY, "Net Electricity"),
        (FuelType::DISTRICTHOTWATER, "District Hot Water"),
        (FuelType::DISTRICTCHILLEDWATER, "District Chilled Water"),
        (FuelType::DISTRICTSTEAM, "District Steam"),
        (FuelType::FUELOIL1, "Fuel Oil 1"),
        (FuelType::FUELOIL2, "Fuel Oil 2"),
        (FuelType::FUELOIL4, "Fuel Oil 4"),
        (FuelType::FUELOIL56, "Fuel Oil 5 and 6"),
        (FuelType::DIESEL, "Diesel 2"),
        (FuelType::KEROSENE, "Kerosene"),
        (FuelType::PROPANE, "Propane"),
    ],
    data_year: Some(("Data Year", 2021)),
    exempt_categories: &[],
    exclude_where: &[("BEUDO Category", "Residential")],
    require_floor_area: true,
    require_site_eui: false,
};

/// Perfil de columnas del censo LL84, del que se evalúa LL97
///
/// Los tipos de uso exentos del programa se excluyen del censo.
pub const LL97_PROFILE: RosterProfile = RosterProfile {
    name: "LL97",
    id_col: "Property Id",
    category_col: "Primary Property Type - Self Selected",
    floor_area_col: "Gross Floor Area (ft2)",
    site_eui_col: Some("Site EUI (kBtu/sf)"),
    ghg_col: Some("Total GHG Emissions (Metric Tons CO2e)"),
    fuel_cols: &[
        (FuelType::NATURALGAS, "Natural Gas"),
        (FuelType::ELECTRICITY, "Electricity"),
        (FuelType::DISTRICTHOTWATER, "District Hot Water"),
        (FuelType::DISTRICTCHILLEDWATER, "District Chilled Water"),
        (FuelType::DISTRICTSTEAM, "District Steam"),
        (FuelType::FUELOIL1, "Fuel Oil 1"),
        (FuelType::FUELOIL2, "Fuel Oil 2"),
        (FuelType::FUELOIL4, "Fuel Oil 4"),
        (FuelType::FUELOIL56, "Fuel Oil 5 and 6"),
        (FuelType::DIESEL, "Diesel 2"),
        (FuelType::PROPANE, "Propane"),
    ],
    data_year: None,
    exempt_categories: &[
        "Worship Facility",
        "Police Station",
        "Prison/Incarceration",
        "Courthouse",
        "Energy/Power Station",
        "Zoo",
        "Mailing Center/Post Office",
        "Other",
    ],
    exclude_where: &[],
    require_floor_area: true,
    require_site_eui: true,
};

/// Emisiones anuales de referencia de Boston [t CO2e]
pub const BERDO_CITY_TOTALS: CityTotals = CityTotals {
    citywide: 6_235_970.0,
    building_sector: 4_335_912.0,
};

/// Intervalos de superficie construida para las distribuciones [ft2]
pub const GFA_BINS: Bins = Bins {
    edges: &[
        0.0,
        50_000.0,
        100_000.0,
        250_000.0,
        500_000.0,
        1_000_000.0,
        std::f64::INFINITY,
    ],
    labels: &[
        "<50k sf",
        "50k-100k sf",
        "100k-250k sf",
        "250k-500k sf",
        "500k-1M sf",
        ">1M sf",
    ],
};

/// Intervalos de intensidad de uso de energía para las distribuciones [kBtu/ft2]
pub const EUI_BINS: Bins = Bins {
    edges: &[
        0.0,
        20.0,
        40.0,
        60.0,
        80.0,
        100.0,
        150.0,
        250.0,
        500.0,
        std::f64::INFINITY,
    ],
    labels: &[
        "0-20", "20-40", "40-60", "60-80", "80-100", "100-150", "150-250", "250-500", ">500",
    ],
};
