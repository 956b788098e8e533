//! Data tables behind the generated responses

pub const DAYS: &[&str] = &[
    "Monday",
    "Tuesday",
    "Wednesday",
    "Thursday",
    "Friday",
    "Saturday",
    "Sunday",
];

pub const MONTHS: &[&str] = &[
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
];

pub const PLANETS: &[&str] = &[
    "Mercury", "Venus", "Earth", "Mars", "Jupiter", "Saturn", "Uranus", "Neptune",
];

/// (phrase that identifies the riddle, question, answer)
pub const ANIMAL_RIDDLES: &[(&str, &str, &str)] = &[
    ("cow with no legs", "What do you call a cow with no legs?", "Ground beef! 🐄"),
    ("bear with no teeth", "What do you call a bear with no teeth?", "A gummy bear! 🐻"),
    ("fish with no eyes", "What do you call a fish with no eyes?", "A fsh! 🐟"),
    ("deer with no eyes", "What do you call a deer with no eyes?", "No idea! 🦌"),
    ("pig that does karate", "What do you call a pig that does karate?", "A pork chop! 🐷"),
    ("sleeping bull", "What do you call a sleeping bull?", "A bulldozer! 🐂"),
    ("alligator in a vest", "What do you call an alligator in a vest?", "An investigator! 🐊"),
    ("dinosaur with an extensive vocabulary", "What do you call a dinosaur with an extensive vocabulary?", "A thesaurus! 🦕"),
    ("owl that does magic", "What do you call an owl that does magic?", "Hoo-dini! 🦉"),
];

pub const JOKES: &[&str] = &[
    "Why don't scientists trust atoms? Because they make up everything! 😂",
    "I told my wifi we needed to talk. Now it won't stop giving me mixed signals. 😂",
    "Why did the scarecrow win an award? He was outstanding in his field! 😂",
    "What do you call fake spaghetti? An impasta! 😂",
    "Why did the group chat break up? Too many mixed messages. 😂",
];

pub const PUNS: &[&str] = &[
    "I'm reading a book about anti-gravity. It's impossible to put down! 😄",
    "I used to be a banker, but I lost interest. 😄",
    "Time flies like an arrow. Fruit flies like a banana. 😄",
    "I would tell you a chemistry joke, but I know I wouldn't get a reaction. 😄",
];

pub const PROGRAMMING_JOKES: &[&str] = &[
    "Why do programmers prefer dark mode? Because light attracts bugs! 🤖",
    "There are 10 kinds of people: those who understand binary and those who don't. 🤖",
    "A SQL query walks into a bar, walks up to two tables and asks: can I join you? 🤖",
    "Why did the developer go broke? Because they used up all their cache. 🤖",
];

pub const KNOCK_KNOCK: &[&str] = &[
    "Knock knock. Who's there? Lettuce. Lettuce who? Lettuce in, it's cold out here! 🚪",
    "Knock knock. Who's there? Boo. Boo who? Don't cry, it's only a joke! 🚪",
    "Knock knock. Who's there? Interrupting cow. Interrupting c... MOO! 🚪",
];

/// (question, answer)
pub const RIDDLES: &[(&str, &str)] = &[
    ("What has keys but can't open locks?", "A piano!"),
    ("What gets wetter the more it dries?", "A towel!"),
    ("What has to be broken before you can use it?", "An egg!"),
    ("What can travel around the world while staying in a corner?", "A stamp!"),
];

pub const FUN_FACTS: &[&str] = &[
    "Honey never spoils. Archaeologists have found edible honey in ancient Egyptian tombs! 💡",
    "Octopuses have three hearts. 💡",
    "Bananas are berries, but strawberries aren't. 💡",
    "A group of flamingos is called a flamboyance. 💡",
    "The first emoji set was created in 1999 and had 176 symbols. 💡",
];

pub const SPACE_FACTS: &[&str] = &[
    "A day on Venus is longer than its year! 🪐",
    "Neutron stars are so dense that a teaspoon of one would weigh about a billion tons. 🪐",
    "There are more stars in the universe than grains of sand on all of Earth's beaches. 🪐",
    "Footprints on the Moon will likely last millions of years because there's no wind. 🪐",
];

pub const ANIMAL_FACTS: &[&str] = &[
    "Cows have best friends and get stressed when they're separated. 🐄",
    "Sea otters hold hands while they sleep so they don't drift apart. 🦦",
    "A snail can sleep for three years. 🐌",
    "Elephants are one of the few animals that recognize themselves in a mirror. 🐘",
];
