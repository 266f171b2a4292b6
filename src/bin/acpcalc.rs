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
//            Daniel Jiménez González <danielj@ietcc.csic.es>
//            Marta Sorribes Gil <msorribes@ietcc.csic.es>

#[macro_use]
extern crate clap;

use exitcode;

use serde_json;

use std::fs::File;
use std::io::prelude::*;
use std::path::Path;
use std::process::exit;
use std::str::FromStr;

use clap::{App, AppSettings, Arg};
use failure::Error;
use failure::Fail;
use failure::ResultExt;

use acpcalc::programs::*;
use acpcalc::types::Meta;
use acpcalc::types::parse_metalines;
use acpcalc::*;

// Funciones auxiliares -----------------------------------------------------------------------

fn readfile(path: &Path) -> Result<String, Error> {
    let mut f = File::open(path).context(format!("Archivo {} no encontrado", path.display()))?;
    let mut contents = String::new();
    f.read_to_string(&mut contents)
        .context("Error al leer el archivo")?;
    Ok(contents)
}

fn writefile(path: &Path, content: &[u8]) {
    let mut file = match File::create(&path) {
        Err(err) => panic!(
            "ERROR: no se ha podido escribir en \"{}\": {:?}",
            path.display(),
            err.cause()
        ),
        Ok(file) => file,
    };
    if let Err(err) = file.write_all(content) {
        panic!(
            "No se ha podido escribir en {}: {:?}",
            path.display(),
            err.cause()
        )
    }
}

// Funciones auxiliares de validación y obtención de valores

/// Comprueba y devuelve el periodo de evaluación de la CLI.
fn get_period(matches: &clap::ArgMatches<'_>, verbosity: u64) -> (u32, u32) {
    let start_year = value_t!(matches, "desde", u32).unwrap_or_else(|error| {
        eprintln!("ERROR: El primer año del periodo no es un valor numérico válido");
        if verbosity > 2 {
            println!("{}", error)
        };
        exit(exitcode::DATAERR);
    });
    let end_year = value_t!(matches, "hasta", u32).unwrap_or_else(|error| {
        eprintln!("ERROR: El último año del periodo no es un valor numérico válido");
        if verbosity > 2 {
            println!("{}", error)
        };
        exit(exitcode::DATAERR);
    });
    if start_year > end_year {
        eprintln!(
            "ERROR: el periodo de evaluación {} - {} está invertido",
            start_year, end_year
        );
        exit(exitcode::DATAERR);
    }
    (start_year, end_year)
}

/// Comprueba y devuelve el año base de las emisiones de referencia BEUDO.
fn get_baseline_year(matches: &clap::ArgMatches<'_>, verbosity: u64) -> u32 {
    value_t!(matches, "base", u32).unwrap_or_else(|error| {
        eprintln!("ERROR: El año base no es un valor numérico válido");
        if verbosity > 2 {
            println!("{}", error)
        };
        exit(exitcode::DATAERR);
    })
}

/// Obtiene el programa de cumplimiento priorizando CLI -> metadatos del censo.
fn get_program(matches: &clap::ArgMatches<'_>, rmeta: &[Meta]) -> Program {
    let name = matches
        .value_of("programa")
        .and_then(|v| {
            println!("Programa (usuario): {}", v);
            Some(v.to_string())
        })
        .or_else(|| {
            if let Some(meta) = rmeta.iter().find(|m| m.key == "PROGRAM") {
                println!("Programa (metadatos): {}", meta.value);
                Some(meta.value.clone())
            } else {
                None
            }
        })
        .or_else(|| {
            eprintln!("ERROR: Sin datos suficientes para determinar el programa de cumplimiento");
            exit(exitcode::USAGE);
        })
        .unwrap();
    Program::from_str(name.trim()).unwrap_or_else(|_| {
        eprintln!("ERROR: Programa de cumplimiento desconocido \"{}\"", name);
        exit(exitcode::DATAERR);
    })
}

// Función principal ------------------------------------------------------------------------------

fn main() {
    let matches = App::new("AcpCalc")
        .bin_name("acpcalc")
        .version(env!("CARGO_PKG_VERSION"))
        .author("
Copyright (c) 2018 Ministerio de Fomento,
                   Instituto de CC. de la Construcción Eduardo Torroja (IETcc-CSIC)

Autores: Rafael Villar Burke <pachi@ietcc.csic.es>,
         Daniel Jiménez González <danielj@ietcc.csic.es>
         Marta Sorribes Gil <msorribes@ietcc.csic.es>

Licencia: Publicado bajo licencia MIT.

")
        .about("AcpCalc - Sanciones por exceso de emisiones en edificios (BERDO, BEUDO, LL97).")
        .setting(AppSettings::NextLineHelp)
        .arg(Arg::with_name("programa")
            .short("p")
            .long("programa")
            .value_name("PROGRAMA")
            .possible_values(&["BERDO", "BEUDO", "LL97"])
            .help("Programa de cumplimiento que define umbrales y factores de emisión\n")
            .takes_value(true)
            .display_order(1))
        .arg(Arg::with_name("archivo_censo")
            .short("c")
            .long("archivo_censo")
            .value_name("ARCHIVO_CENSO")
            .required(true)
            .help("Archivo del censo de edificios con los consumos declarados")
            .takes_value(true)
            .display_order(2))
        .arg(Arg::with_name("archivo_factores")
            .short("f")
            .long("archivo_factores")
            .value_name("ARCHIVO_FACTORES")
            .help("Archivo de factores de emisión que sustituye a los del programa")
            .takes_value(true)
            .display_order(3))
        .arg(Arg::with_name("desde")
            .long("desde")
            .value_name("AÑO")
            .default_value("2025")
            .help("Primer año del periodo de evaluación")
            .takes_value(true)
            .display_order(4))
        .arg(Arg::with_name("hasta")
            .long("hasta")
            .value_name("AÑO")
            .default_value("2050")
            .help("Último año del periodo de evaluación")
            .takes_value(true)
            .display_order(5))
        .arg(Arg::with_name("base")
            .short("b")
            .long("base")
            .value_name("AÑO")
            .default_value("2021")
            .help("Año base de las emisiones de referencia BEUDO")
            .takes_value(true)
            .display_order(6))
        .arg(Arg::with_name("archivo_salida_json")
            .long("json")
            .value_name("ARCHIVO_SALIDA_JSON")
            .help("Archivo de salida de resultados detallados en formato JSON")
            .takes_value(true))
        .arg(Arg::with_name("gen_archivo_sanciones")
            .long("os")
            .value_name("GEN_ARCHIVO_SANCIONES")
            .help("Archivo de salida de las sanciones por edificio en formato CSV")
            .takes_value(true))
        .arg(Arg::with_name("gen_archivo_agregados")
            .long("oa")
            .value_name("GEN_ARCHIVO_AGREGADOS")
            .help("Archivo de salida de las sanciones agregadas por tipo de uso en formato CSV")
            .takes_value(true))
        .arg(Arg::with_name("showlicense")
            .short("L")
            .long("licencia")
            .help("Muestra la licencia del programa (MIT)"))
        .arg(Arg::with_name("v")
            .short("v")
            .multiple(true)
            .help("Sets the level of verbosity"))
        .get_matches();

    if matches.is_present("showlicense") {
        println!(
            "
Copyright (c) 2018 Ministerio de Fomento
                   Instituto de Ciencias de la Construcción Eduardo Torroja (IETcc-CSIC)

Permission is hereby granted, free of charge, to any person obtaining a copy
of this software and associated documentation files (the 'Software'), to deal
in the Software without restriction, including without limitation the rights
to use, copy, modify, merge, publish, distribute, sublicense, and/or sell
copies of the Software, and to permit persons to whom the Software is
furnished to do so, subject to the following conditions:

The above copyright notice and this permission notice shall be included in
all copies or substantial portions of the Software.

THE SOFTWARE IS PROVIDED 'AS IS', WITHOUT WARRANTY OF ANY KIND, EXPRESS OR
IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF MERCHANTABILITY,
FITNESS FOR A PARTICULAR PURPOSE AND NONINFRINGEMENT. IN NO EVENT SHALL THE
AUTHORS OR COPYRIGHT HOLDERS BE LIABLE FOR ANY CLAIM, DAMAGES OR OTHER
LIABILITY, WHETHER IN AN ACTION OF CONTRACT, TORT OR OTHERWISE, ARISING FROM,
OUT OF OR IN CONNECTION WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE
SOFTWARE.

Author(s): Rafael Villar Burke <pachi@ietcc.csic.es>
            Daniel Jiménez González <danielj@ietcc.csic.es>
            Marta Sorribes Gil <msorribes@ietcc.csic.es>"
        );
        exit(exitcode::OK);
    }

    // Prólogo ------------------------------------------------------------------------------------

    let verbosity = matches.occurrences_of("v");

    if verbosity > 2 {
        println!("Opciones indicadas: ----------");
        println!("{:#?}", matches);
        println!("------------------------------");
    }

    println!("** Datos de entrada");

    // Censo de edificios -------------------------------------------------------------------------
    let archivo_censo = matches.value_of("archivo_censo").unwrap();
    let path = Path::new(archivo_censo);
    let rosterstring = match readfile(path) {
        Ok(contents) => {
            println!("Censo de edificios: \"{}\"", path.display());
            contents
        }
        Err(err) => {
            eprintln!(
                "ERROR: No se ha podido leer el archivo del censo de edificios \"{}\" -> {}",
                path.display(),
                err.as_fail()
            );
            exit(exitcode::IOERR);
        }
    };

    // Metadatos del censo
    let rmeta = parse_metalines(&rosterstring).unwrap_or_else(|error| {
        eprintln!(
            "ERROR: Formato incorrecto de los metadatos del censo \"{}\" ({})",
            path.display(),
            error
        );
        exit(exitcode::DATAERR);
    });

    if verbosity > 1 && !rmeta.is_empty() {
        println!("Metadatos del censo:");
        for meta in &rmeta {
            println!("  {}: {}", meta.key, meta.value);
        }
    }

    // Programa de cumplimiento -------------------------------------------------------------------
    // Argumentos de CLI > Metadatos del censo
    let program = get_program(&matches, &rmeta);

    // Periodo de evaluación
    let (start_year, end_year) = get_period(&matches, verbosity);
    println!("Periodo de evaluación: {} - {}", start_year, end_year);

    // Censo según el perfil del programa
    let mut roster = Roster::from_csv(&rosterstring, program.profile()).unwrap_or_else(|error| {
        eprintln!(
            "ERROR: Formato incorrecto del archivo del censo \"{}\" ({})",
            path.display(),
            error
        );
        exit(exitcode::DATAERR);
    });
    println!("Edificios del censo: {}", roster.buildings.len());

    // Factores de emisión ------------------------------------------------------------------------
    // Definición desde archivo > factores por defecto del programa
    let factors = if let Some(archivo_factores) = matches.value_of("archivo_factores") {
        let path = Path::new(archivo_factores);
        let fstring = match readfile(path) {
            Ok(fstring) => {
                println!("Factores de emisión (archivo): \"{}\"", path.display());
                fstring
            }
            Err(err) => {
                eprintln!(
                    "ERROR: No se ha podido leer el archivo de factores de emisión \"{}\" -> {}",
                    path.display(),
                    err.as_fail()
                );
                exit(exitcode::IOERR);
            }
        };
        fstring.parse::<FactorTable>().unwrap_or_else(|error| {
            eprintln!(
                "ERROR: No se ha podido interpretar el archivo de factores de emisión \"{}\" -> {}",
                path.display(),
                error
            );
            exit(exitcode::DATAERR);
        })
    } else {
        println!("Factores de emisión (programa): {}", program);
        program.factors().unwrap_or_else(|error| {
            eprintln!(
                "ERROR: No se han podido generar los factores de emisión ({})",
                error
            );
            exit(exitcode::DATAERR);
        })
    };

    // Umbrales de emisiones ----------------------------------------------------------------------
    // BERDO los trae el censo; BEUDO y LL97 se derivan aquí
    match program {
        Program::BEUDO => {
            let baseline_year = get_baseline_year(&matches, verbosity);
            augment_thresholds(&mut roster, &factors, baseline_year).unwrap_or_else(|error| {
                eprintln!(
                    "ERROR: No se han podido calcular los umbrales BEUDO ({})",
                    error
                );
                exit(exitcode::DATAERR);
            });
            if verbosity > 1 {
                println!(
                    "Umbrales BEUDO calculados desde las emisiones del año base {}",
                    baseline_year
                );
            }
        }
        Program::LL97 => {
            assign_thresholds(&mut roster, LL97_CATEGORY_LIMITS, start_year, end_year);
            if verbosity > 1 {
                println!("Umbrales LL97 asignados según el tipo de uso");
            }
        }
        Program::BERDO => (),
    }

    // Cálculo de las sanciones -------------------------------------------------------------------
    let params = program.params(start_year, end_year);
    let assessment = compute_fines(&roster, &factors, &params).unwrap_or_else(|error| {
        eprintln!(
            "ERROR: No se han podido calcular las sanciones ({})",
            error
        );
        exit(exitcode::DATAERR);
    });

    // Salida de resultados ------------------------------------------------------------------------
    // Guardar evaluación en formato json
    if matches.is_present("archivo_salida_json") {
        let path = Path::new(matches.value_of_os("archivo_salida_json").unwrap());
        if verbosity > 0 {
            println!("Resultados en formato JSON: {:?}", path.display());
        }
        let json = serde_json::to_string_pretty(&assessment).unwrap_or_else(|error| {
            eprintln!("ERROR: No se ha podido convertir la evaluación al formato JSON");
            if verbosity > 2 {
                println!("{:?}", error)
            };
            exit(exitcode::DATAERR);
        });
        writefile(&path, json.as_bytes());
    }

    // Guardar sanciones por edificio en formato CSV
    if matches.is_present("gen_archivo_sanciones") {
        let path = Path::new(matches.value_of_os("gen_archivo_sanciones").unwrap());
        let csvstring = fines_to_csv(&assessment, program.profile()).unwrap_or_else(|error| {
            eprintln!(
                "ERROR: No se han podido convertir las sanciones al formato CSV ({})",
                error
            );
            exit(exitcode::DATAERR);
        });
        writefile(&path, csvstring.as_bytes());
        if verbosity > 0 {
            println!(
                "Guardado archivo de sanciones por edificio: {}",
                path.display()
            );
        }
    }

    // Guardar sanciones agregadas por tipo de uso en formato CSV
    if matches.is_present("gen_archivo_agregados") {
        let path = Path::new(matches.value_of_os("gen_archivo_agregados").unwrap());
        let aggregates = aggregate_fines(&assessment.fines);
        let csvstring = aggregates_to_csv(&aggregates, program.profile()).unwrap_or_else(|error| {
            eprintln!(
                "ERROR: No se han podido convertir los agregados al formato CSV ({})",
                error
            );
            exit(exitcode::DATAERR);
        });
        writefile(&path, csvstring.as_bytes());
        if verbosity > 0 {
            println!(
                "Guardado archivo de sanciones agregadas: {}",
                path.display()
            );
        }
    }

    // Mostrar siempre en formato plain
    println!("{}", assessment.to_plain());

    // Estadísticas del censo ----------------------------------------------------------------------
    if verbosity > 0 {
        let allocation = category_allocation(&roster.buildings);
        println!("** Reparto del censo por tipo de uso\n");
        println!("{}\n", allocation.to_plain());

        if let Some(totals) = program.city_totals() {
            let shares = emissions_shares(&roster.buildings, &totals);
            println!("** Cuota de las emisiones de la ciudad\n");
            println!("{}\n", shares.to_plain());
        }

        let gfa = category_summary(&roster.buildings, &GFA_BINS, |b| b.floor_area);
        println!("** Superficie por tipo de uso\n");
        println!("{}\n", summary_to_plain(&gfa, &GFA_BINS));

        let eui = category_summary(&roster.buildings, &EUI_BINS, |b| b.site_eui);
        println!("** Intensidad energética por tipo de uso\n");
        println!("{}\n", summary_to_plain(&eui, &EUI_BINS));

        let significant = significant_categories(&allocation);
        println!("** Tipos de uso significativos del censo\n");
        println!("{}", significant.to_plain());
    }
}
