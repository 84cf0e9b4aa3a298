use ascii_pedigree::{FamilyError, Relation, Tree};
use tracing_subscriber::EnvFilter;

fn main() -> Result<(), FamilyError> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .init();

    println!("=== Family Tree Example ===\n");

    let mut tree = Tree::new();
    let gran = tree.new_person("Gran");
    let gramps = tree.new_person("Gramps");
    let mum = tree.new_person("Mum");
    let dad = tree.new_person("Dad");
    let aunt = tree.new_person("Aunt");
    let kid = tree.new_person("Kid");
    let baby = tree.new_person("Baby");

    tree.add_via_relation(gran, gramps, Relation::Partners)?;
    tree.add_via_relation(gran, mum, Relation::Parents)?;
    tree.add_via_relation(aunt, mum, Relation::Siblings)?;
    tree.add_via_relation(dad, mum, Relation::Partners)?;
    tree.add_via_relation_str(kid, dad, "children")?;
    tree.add_via_relation(baby, kid, Relation::Siblings)?;

    // 1. Descendants of the grandparents
    println!("1. Descendants of Gran:");
    println!("{}\n", tree.render(gran)?);

    // 2. Relation queries
    println!("2. Relations:");
    for (a, b) in [(gran, kid), (aunt, baby), (dad, gramps), (kid, baby)] {
        println!(
            "   {} is {}'s {}",
            tree.name(a)?,
            tree.name(b)?,
            tree.get_relation(a, b)?
        );
    }
    println!();

    // 3. One person's relatives
    println!("3. Profile:");
    print!("{}", tree.profile(mum)?);
    println!();

    // 4. Rejected relations
    println!("4. Errors:");
    let stranger = tree.new_person("Stranger");
    if let Err(err) = tree.add_via_relation(stranger, kid, Relation::Parents) {
        println!("   {}", err);
    }
    if let Err(err) = tree.add_via_relation(aunt, kid, Relation::Siblings) {
        println!("   {}", err);
    }
    println!();

    println!("{}", tree);
    Ok(())
}
