//! Deterministic profile name and email generation from curated lists.
//!
//! All generation is deterministic (same RNG seed = same names).

use crate::rng::FixtureRng;

pub struct NameGenerator;

impl NameGenerator {
    /// Generate a full name (first + last) deterministically.
    pub fn generate_full_name(rng: &mut FixtureRng) -> String {
        let first = Self::pick(Self::first_names(), rng);
        let last = Self::pick(Self::last_names(), rng);
        format!("{} {}", first, last)
    }

    /// Derive an email address from a full name. The ordinal keeps
    /// addresses unique when the curated lists collide.
    pub fn derive_email(full_name: &str, ordinal: usize) -> String {
        let local: String = full_name
            .to_lowercase()
            .split_whitespace()
            .collect::<Vec<_>>()
            .join(".");
        format!("{local}.{ordinal}@example.com")
    }

    fn pick(names: &'static [&'static str], rng: &mut FixtureRng) -> &'static str {
        let index = rng.next_u64_below(names.len() as u64) as usize;
        names[index]
    }

    /// Curated list of first names (diverse, realistic).
    fn first_names() -> &'static [&'static str] {
        &[
            "James", "John", "Robert", "Michael", "William", "David", "Richard", "Joseph",
            "Thomas", "Charles", "Christopher", "Daniel", "Matthew", "Anthony", "Mark",
            "Donald", "Steven", "Paul", "Andrew", "Joshua", "Kenneth", "Kevin", "Brian",
            "George", "Timothy", "Ronald", "Edward", "Jason", "Jeffrey", "Ryan", "Jacob",
            "Gary", "Nicholas", "Eric", "Jonathan", "Stephen", "Larry", "Justin", "Scott",
            "Brandon", "Benjamin", "Samuel", "Raymond", "Gregory", "Frank", "Alexander",
            "Patrick", "Jack", "Dennis", "Jerry", "Tyler", "Aaron", "Jose", "Adam",
            "Nathan", "Henry", "Douglas", "Zachary", "Peter", "Kyle", "Noah", "Ethan",
            "Mary", "Patricia", "Jennifer", "Linda", "Barbara", "Elizabeth", "Susan",
            "Jessica", "Sarah", "Karen", "Lisa", "Nancy", "Betty", "Margaret", "Sandra",
            "Ashley", "Kimberly", "Emily", "Donna", "Michelle", "Carol", "Amanda",
            "Dorothy", "Melissa", "Deborah", "Stephanie", "Rebecca", "Sharon", "Laura",
            "Cynthia", "Kathleen", "Amy", "Angela", "Anna", "Brenda", "Pamela", "Emma",
            "Nicole", "Helen", "Samantha", "Katherine", "Christine", "Rachel", "Carolyn",
            "Janet", "Catherine", "Maria", "Heather", "Diane", "Ruth", "Julie", "Olivia",
            "Joyce", "Victoria", "Kelly", "Lauren", "Christina", "Joan", "Evelyn", "Megan",
        ]
    }

    /// Curated list of last names (diverse, realistic).
    fn last_names() -> &'static [&'static str] {
        &[
            "Smith", "Johnson", "Williams", "Brown", "Jones", "Garcia", "Miller", "Davis",
            "Rodriguez", "Martinez", "Hernandez", "Lopez", "Gonzalez", "Wilson", "Anderson",
            "Thomas", "Taylor", "Moore", "Jackson", "Martin", "Lee", "Perez", "Thompson",
            "White", "Harris", "Sanchez", "Clark", "Ramirez", "Lewis", "Robinson", "Walker",
            "Young", "Allen", "King", "Wright", "Scott", "Torres", "Nguyen", "Hill",
            "Flores", "Green", "Adams", "Nelson", "Baker", "Hall", "Rivera", "Campbell",
            "Mitchell", "Carter", "Roberts", "Gomez", "Phillips", "Evans", "Turner", "Diaz",
            "Parker", "Cruz", "Edwards", "Collins", "Reyes", "Stewart", "Morris", "Morales",
            "Murphy", "Cook", "Rogers", "Gutierrez", "Ortiz", "Morgan", "Cooper", "Peterson",
            "Bailey", "Reed", "Kelly", "Howard", "Ramos", "Kim", "Cox", "Ward",
            "Richardson", "Watson", "Brooks", "Chavez", "Wood", "James", "Bennett", "Gray",
            "Mendoza", "Ruiz", "Hughes", "Price", "Alvarez", "Castillo", "Sanders", "Patel",
            "Myers", "Long", "Ross", "Foster", "Jimenez", "Powell", "Jenkins", "Perry",
            "Russell", "Sullivan", "Bell", "Coleman", "Butler", "Henderson", "Barnes",
            "Fisher", "Vasquez", "Simmons", "Romero", "Jordan", "Patterson", "Alexander",
            "Hamilton", "Graham", "Reynolds", "Griffin", "Wallace", "Moreno", "West",
        ]
    }
}
