//! Writes a small `pokedex.csv` for trying out the viewer.

use std::path::Path;

/// Name, Type 1, Type 2 ("" when absent), HP, Attack, Defense, SP. Atk., SP. Def, Speed.
const SPECIES: &[(&str, &str, &str, [u32; 6])] = &[
    ("Bulbasaur", "Grass", "Poison", [45, 49, 49, 65, 65, 45]),
    ("Ivysaur", "Grass", "Poison", [60, 62, 63, 80, 80, 60]),
    ("Venusaur", "Grass", "Poison", [80, 82, 83, 100, 100, 80]),
    ("Charmander", "Fire", "", [39, 52, 43, 60, 50, 65]),
    ("Charmeleon", "Fire", "", [58, 64, 58, 80, 65, 80]),
    ("Charizard", "Fire", "Flying", [78, 84, 78, 109, 85, 100]),
    ("Squirtle", "Water", "", [44, 48, 65, 50, 64, 43]),
    ("Wartortle", "Water", "", [59, 63, 80, 65, 80, 58]),
    ("Blastoise", "Water", "", [79, 83, 100, 85, 105, 78]),
    ("Caterpie", "Bug", "", [45, 30, 35, 20, 20, 45]),
    ("Butterfree", "Bug", "Flying", [60, 45, 50, 90, 80, 70]),
    ("Pidgey", "Normal", "Flying", [40, 45, 40, 35, 35, 56]),
    ("Rattata", "Normal", "", [30, 56, 35, 25, 35, 72]),
    ("Pikachu", "Electric", "", [35, 55, 40, 50, 50, 90]),
    ("Raichu", "Electric", "", [60, 90, 55, 90, 80, 110]),
    ("Magnemite", "Electric", "Steel", [25, 35, 70, 95, 55, 45]),
    ("Geodude", "Rock", "Ground", [40, 80, 100, 30, 30, 20]),
    ("Onix", "Rock", "Ground", [35, 45, 160, 30, 45, 70]),
    ("Gastly", "Ghost", "Poison", [30, 35, 30, 100, 35, 80]),
    ("Gengar", "Ghost", "Poison", [60, 65, 60, 130, 75, 110]),
    ("Abra", "Psychic", "", [25, 20, 15, 105, 55, 90]),
    ("Mewtwo", "Psychic", "", [106, 110, 90, 154, 90, 130]),
    ("Gyarados", "Water", "Flying", [95, 125, 79, 60, 100, 81]),
    ("Snorlax", "Normal", "", [160, 110, 65, 65, 110, 30]),
    ("Dratini", "Dragon", "", [41, 64, 45, 50, 50, 50]),
    ("Dragonite", "Dragon", "Flying", [91, 134, 95, 100, 100, 80]),
];

fn main() {
    let output_path = Path::new("pokedex.csv");
    let mut writer = csv::Writer::from_path(output_path).expect("Failed to create output file");

    // Incidental header whitespace, as found in scraped tables.
    writer
        .write_record([
            "#", " Name", "Type 1", "Type 2", "Total", "HP", "Attack", "Defense", "SP. Atk.",
            "SP. Def", "Speed ", "Image",
        ])
        .expect("Failed to write header");

    for (number, (name, primary, secondary, stats)) in SPECIES.iter().enumerate() {
        let total: u32 = stats.iter().sum();
        let image = format!("images/{}.png", name.to_lowercase());

        let mut row = vec![
            (number + 1).to_string(),
            name.to_string(),
            primary.to_string(),
            secondary.to_string(),
            total.to_string(),
        ];
        row.extend(stats.iter().map(u32::to_string));
        row.push(image);

        writer.write_record(&row).expect("Failed to write row");
    }
    writer.flush().expect("Failed to flush output");

    println!("Wrote {} Pokémon to {}", SPECIES.len(), output_path.display());
}
