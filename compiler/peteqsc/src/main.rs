//! PETEQS CLI
//!
//! Runs, checks and lexes PETEQS pseudocode files.

use peteqsc::commands::{check_file, lex_file, parse_run_flags, run_file};

fn main() {
    peteqsc::init_tracing();

    let args: Vec<String> = std::env::args().collect();

    if args.len() < 2 {
        print_usage();
        return;
    }

    let command = &args[1];

    match command.as_str() {
        "run" => {
            if args.len() < 3 {
                eprintln!("Uso: peteqs run <arquivo> [opções]");
                eprintln!();
                print_run_options();
                std::process::exit(1);
            }
            let flags = match parse_run_flags(&args[3..]) {
                Ok(flags) => flags,
                Err(msg) => {
                    eprintln!("erro: {msg}");
                    std::process::exit(1);
                }
            };
            run_file(&args[2], flags);
        }
        "check" => {
            if args.len() < 3 {
                eprintln!("Uso: peteqs check <arquivo>");
                std::process::exit(1);
            }
            check_file(&args[2]);
        }
        "lex" => {
            if args.len() < 3 {
                eprintln!("Uso: peteqs lex <arquivo>");
                std::process::exit(1);
            }
            lex_file(&args[2]);
        }
        "help" | "--help" | "-h" => {
            print_usage();
        }
        "version" | "--version" | "-v" => {
            println!("PETEQS {}", env!("CARGO_PKG_VERSION"));
        }
        _ => {
            // A bare file path runs it with interactive input.
            if std::path::Path::new(command).is_file() {
                match parse_run_flags(&args[2..]) {
                    Ok(flags) => run_file(command, flags),
                    Err(msg) => {
                        eprintln!("erro: {msg}");
                        std::process::exit(1);
                    }
                }
            } else {
                eprintln!("Comando desconhecido: {command}");
                eprintln!();
                print_usage();
                std::process::exit(1);
            }
        }
    }
}

fn print_usage() {
    println!("PETEQS - interpretador de pseudocódigo");
    println!();
    println!("Uso: peteqs <comando> [opções]");
    println!();
    println!("Comandos:");
    println!("  run <arquivo>      Executa um programa");
    println!("  check <arquivo>    Verifica a sintaxe sem executar");
    println!("  lex <arquivo>      Mostra as linhas e tokens");
    println!("  help               Mostra esta ajuda");
    println!("  version            Mostra a versão");
    println!();
    print_run_options();
    println!();
    println!("Variáveis de ambiente:");
    println!("  RUST_LOG           Filtro de logs (ex.: peteqs_eval=trace)");
}

fn print_run_options() {
    println!("Opções de run:");
    println!("  --input=<valor>    Entrada para LEIA (repetível; sem nenhuma, lê do stdin)");
    println!("  --json             Imprime o resultado como JSON");
    println!("  --stream           Escreve a saída à medida que é produzida");
    println!("  --timeout=<seg>    Tempo máximo por laço (padrão: 30)");
    println!("  --max-depth=<n>    Profundidade máxima de chamadas (padrão: 1000)");
}
