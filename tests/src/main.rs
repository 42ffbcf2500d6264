use tracing_subscriber::EnvFilter;
use unicode_charmap::{list_scripts, CodepointList, ScriptCodepointList, UNICHAR_MAX};

// покрытие таблицы письменностей: сколько диапазонов и кодпоинтов у каждой письменности.
// с аргументами - диапазоны перечисленных письменностей
fn main()
{
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let scripts: Vec<String> = std::env::args().skip(1).collect();

    if !scripts.is_empty() {
        return print_ranges(&scripts);
    }

    let mut total = 0;

    for &name in list_scripts() {
        let list = match ScriptCodepointList::with_script(name) {
            Ok(list) => list,
            Err(error) => {
                eprintln!("{}", error);
                continue;
            }
        };

        println!(
            "{:<24} {:>5} диапазонов {:>8} кодпоинтов",
            name,
            list.ranges().len(),
            list.len()
        );

        total += list.len();
    }

    println!();
    println!("всего: {} из {}", total, UNICHAR_MAX as usize + 1);
}

fn print_ranges(scripts: &[String])
{
    let list = match ScriptCodepointList::with_scripts(scripts) {
        Ok(list) => list,
        Err(error) => {
            eprintln!("{}", error);
            return;
        }
    };

    for range in list.ranges() {
        println!(
            "{:>8}  U+{:04X} .. U+{:04X}",
            range.index_offset, range.start, range.end
        );
    }
}
