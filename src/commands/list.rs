use crate::catalogue::CASES;
use crate::errors::HazResult;
use console::style;

/// Print the catalogue without running any case. Metadata only; nothing
/// here touches the fixed buffer or spawns anything.
pub fn handle(verbose: bool) -> HazResult<()> {
    println!("{}", style("Catalogued hazard cases").blue().bold().underlined());

    for case in CASES {
        println!("  {:24} {}", style(case.id).white().bold(), case.class);

        if verbose {
            println!("    {:10} {}", style("Operation"), case.operation);
            println!("    {:10} {}", style("Trigger"), case.trigger);
        }
    }

    Ok(())
}
