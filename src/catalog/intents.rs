//! Built-in intent rules and their priorities

use super::labels::*;
use crate::entities::{NameExtractor, DEFAULT_NAME_EXCLUSIONS};
use crate::predicate::{FuzzyPredicate, NamePredicate};
use crate::rules::{IntentRule, PatternLibrary, PriorityTable};
use crate::types::IntentLabel;

/// Words allowed between "i am" and a feeling
const I_AM_FILLERS: &[&str] = &["so", "very", "really", "kinda", "a bit"];

/// Feeling rules: the words that complete "i am ...", plus extra alternatives
const FEELINGS: &[(IntentLabel, &[&str], &str)] = &[
    (FEELING_HAPPY, &["happy", "glad", "great", "excited", "good", "awesome", "fantastic"], ""),
    (FEELING_SAD, &["sad", "down", "depressed", "unhappy", "upset", "heartbroken", "crying"], ""),
    (FEELING_ANGRY, &["angry", "mad", "furious", "annoyed", "frustrated", "pissed"], ""),
    (FEELING_BORED, &["bored"], r"|\bnothing to do\b|\bso boring\b"),
    (FEELING_LONELY, &["lonely", "alone"], r"|\bno friends\b|\bfeel(ing)? (lonely|alone)\b"),
    (FEELING_TIRED, &["tired", "sleepy", "exhausted", "worn out"], ""),
    (FEELING_HUNGRY, &["hungry", "starving", "thirsty"], ""),
    (FEELING_STRESSED, &["stressed", "anxious", "nervous", "overwhelmed", "worried"], r"|\b(stress|anxiety)\b"),
];

/// Whole-message arithmetic. Symbol operators that also appear in dates,
/// phone numbers and ranges (`-`, `/`, `x`) need surrounding spaces.
pub const ARITHMETIC_PATTERN: &str = r"^(?:(?:what is|what's|calculate|compute|how much is)\s+)?(-?\d+(?:\.\d+)?)(\s*[+*]\s*|\s+(?:plus|minus|times|divided by|multiplied by|[-/x])\s+)(-?\d+(?:\.\d+)?)\s*[?=]?$";

fn feeling_pattern(words: &[&str], extra: &str) -> String {
    let fillers: Vec<String> = I_AM_FILLERS.iter().map(|f| format!("{} ", f)).collect();
    format!(
        r"\bi('m| am) ({})?({})\b{}",
        fillers.join("|"),
        words.join("|"),
        extra
    )
}

/// Default exclusions plus every word the feeling rules put after "i am"
fn name_exclusions() -> Vec<&'static str> {
    let feeling_words = FEELINGS.iter().flat_map(|(_, words, _)| *words);
    DEFAULT_NAME_EXCLUSIONS
        .iter()
        .chain(I_AM_FILLERS)
        .chain(feeling_words)
        .copied()
        .flat_map(str::split_whitespace)
        .collect()
}

fn patterns() -> Vec<(IntentLabel, String)> {
    let table: Vec<(IntentLabel, &str)> = vec![
        // social
        (GREETING, r"^(hi|hello|hey|heya|hiya|howdy|greetings|yo|sup|hola)\b"),
        (GOOD_MORNING, r"\bgood (morning|afternoon|evening)\b"),
        (GOOD_NIGHT, r"\b(good ?night|nighty night|going to bed|time for bed|off to bed)\b"),
        (FAREWELL, r"\b(bye|goodbye|good bye|bye bye|see (you|ya)|farewell|cya|talk (to you )?later|gotta go|got to go)\b|^later\b"),
        (THANKS, r"\b(thanks|thank you|cheers|appreciate it|much appreciated)\b"),
        (HOW_ARE_YOU, r"\bhow are you\b|\bhow('s| is) it going\b|\bhow are things\b|\bhow do you do\b|\bhow have you been\b"),
        (WHATS_UP, r"\bwhat's up\b|\bwhat are you (up to|doing)\b|^sup\b|\bwhat's new\b"),
        (COMPLIMENT, r"\byou('re| are) (so |very |really )?(smart|cool|awesome|great|funny|amazing|helpful|nice|the best|clever|cute)\b|\bi like (you|talking to you)\b|\bgood (bot|job)\b"),
        (LOVE_DECLARATION, r"\bi love you\b|\bwill you marry me\b|\bbe my (girlfriend|boyfriend|valentine)\b|\bdo you love me\b"),
        (INSULT, r"\byou('re| are) (so |very |really )?(stupid|dumb|useless|annoying|boring|bad|terrible|the worst|an idiot)\b|\b(shut up|i hate you|you suck)\b"),
        (APOLOGY, r"\b(sorry|my bad|apologi[sz]e)\b"),
        (LAUGH, r"\b(lol|lmao|rofl|ha(ha)+|he(he)+|that's funny|so funny)\b"),
        // about the assistant
        (BOT_IDENTITY, r"\bare you (a |an )?(bot|robot|ai|human|real|person|machine|chatbot|computer|program)\b|\bam i (talking|chatting) (to|with) (a )?(bot|robot|human|real person|machine)\b"),
        (BOT_LEARNING, r"\b(do|can|will) you (learn|get smarter|remember (things|this|our chat))\b|\bare you (self[- ]learning|machine learning|chatgpt|gpt|an llm)\b|\bdo you use (ai|machine learning|chatgpt)\b"),
        (BOT_NAME, r"\bwhat('s| is) your name\b|\bwho are you\b|\bwhat (should|do|can) i call you\b|\bdo you have a name\b"),
        (BOT_CREATOR, r"\bwho (made|created|built|programmed|designed|wrote) you\b|\bwho('s| is) your (creator|maker|developer)\b"),
        (BOT_AGE, r"\bhow old are you\b|\bwhat('s| is) your age\b|\bwhen were you (born|made|created)\b|\bwhen is your birthday\b"),
        (BOT_FEELINGS, r"\bdo you (have|feel) (feelings|emotions)\b|\bcan you feel\b|\bare you (happy|sad|alive|conscious|sentient)\b"),
        (BOT_LOCATION, r"\bwhere (are you|do you live|are you from|do you come from)\b"),
        (BOT_FAVORITE_COLOR, r"\bfavou?rite colou?r\b"),
        (BOT_FAVORITE_FOOD, r"\bfavou?rite food\b|\bwhat do you (like to )?eat\b|\bdo you eat\b"),
        (BOT_HOBBY, r"\bwhat do you do for fun\b|\b(your|any) hobbies\b|\bwhat do you like to do\b"),
        (ASK_USER_NAME, r"\bwhat('s| is) my name\b|\bdo you (know|remember) my name\b|\bwho am i\b"),
        // product
        (APP_INFO, r"\bwhat('s| is) huddle\b|\btell me about (huddle|the app|this app|this site)\b|\bwhat does huddle do\b|\bwhat is this (app|site|website|place)\b"),
        (FEATURES_INFO, r"\bfeatures?\b|\bwhat can i do (on|with|in) (huddle|the app|this app|it)\b"),
        (PRICING_INFO, r"\b(price|pricing|cost|costs|subscription|premium|paid|pay for)\b|\bhow much (is|does)\b|\bis (it|huddle|the app) free\b"),
        (DOWNLOAD_INFO, r"\b(download|install|app store|play store|google play)\b|\bget the app\b|\bwhere (can|do) i get\b"),
        (PLATFORM_INFO, r"\b(android|iphone|ios|ipad|macos|windows|linux|desktop app|web version|platforms?)\b"),
        (PRIVACY_INFO, r"\b(privacy|private|my data|personal data|personal information|data policy|encrypt(ed|ion)?|end[- ]to[- ]end|tracking|sell my data)\b"),
        (SAFETY_INFO, r"\b(safe|safety|harass(ment|ed)?|bully(ing)?|moderat(ion|or|ors)|block (someone|a user|people|them))\b|\breport (someone|a user|abuse|a post|harassment)\b"),
        (ACCOUNT_HELP, r"\b(sign ?up|create an account|register|log ?in|sign ?in|my account|username|profile|verify my email)\b"),
        (DELETE_ACCOUNT, r"\b(delete|remove|close|deactivate|cancel) (my )?(account|profile)\b"),
        (PASSWORD_RESET, r"\b(forgot|reset|change|lost|recover) (my )?password\b|\bpassword reset\b"),
        (CONTACT_SUPPORT, r"\b(contact (you|support|the team|someone)|support team|customer (service|support)|email (you|support))\b|\btalk to (a )?(human|person|real person|someone real)\b"),
        (BUG_REPORT, r"\b(bug|bugs|glitch|crash(es|ed|ing)?|not working|broken|doesn't work|won't (load|open)|error message)\b"),
        (FEEDBACK_INFO, r"\b(feedback|suggestion|suggest a feature|feature request|i have an idea)\b"),
        (MESSAGE_BOARD_INFO, r"\b(message board|community board|forum|post a message|leave a message|the board)\b"),
        (REVIEWS_INFO, r"\b(reviews?|ratings?|testimonials?)\b|\brate (the app|huddle|you)\b|\bleave a review\b"),
        (SURVEY_INFO, r"\b(survey|questionnaire|poll)\b"),
        (TEAM_INFO, r"\bwho (made|built|created|runs|owns|founded) (huddle|the app|this app|this site)\b|\b(the team|founders?|the company|about us)\b"),
        (CAREERS_INFO, r"\b(jobs?|careers?|hiring|internships?)\b|\bwork (for|at) (you|huddle)\b"),
        (EMOJI_INFO, r"\b(emojis?|emoticons?|stickers?|gifs?)\b"),
        (NOTIFICATIONS_INFO, r"\b(notifications?|notify|push alerts?|mute)\b"),
        (DARK_MODE_INFO, r"\b(dark mode|light mode|night mode|dark theme|themes?)\b"),
        (GROUP_CHAT_INFO, r"\b(group chats?|group messages?|chat rooms?|channels?|groups?)\b"),
        (VIDEO_CALL_INFO, r"\b(video (call|chat)s?|voice (call|chat)s?|facetime|calling)\b"),
        (AGE_REQUIREMENT, r"\bhow old (do|must|should) (i|you) (be|have to be)\b|\bage (limit|requirement|restriction)\b|\bminimum age\b|\bunder 13\b|\bfor kids\b"),
        (LANGUAGE_SUPPORT, r"\b(what|which) languages?\b|\bin (spanish|french|german|portuguese|italian|japanese)\b|\b(translate|translation)\b"),
        // jokes
        (JOKE_REQUEST, r"\b(jokes?|make me laugh|something funny|funny story|cheer me up)\b"),
        (JOKE_ANIMAL, r"\bwhat do you call an? [a-z]+ (with|without|that|who|in)\b|\b(cow|bear|fish|dinosaur|deer|pig|bull|alligator|sheep|owl)s? (with no|without)\b|\banimal jokes?\b|\bjokes? about (an? )?(animals?|cows?|dogs?|cats?|fish|bears?)\b"),
        (JOKE_KNOCK_KNOCK, r"\bknock[ -]?knock\b"),
        (JOKE_PUN, r"\bpuns?\b|\bdad jokes?\b"),
        (JOKE_PROGRAMMING, r"\b(programming|programmer|coding|developer|computer|nerd|tech) jokes?\b|\bjokes? about (programming|coding|computers|developers)\b"),
        (RIDDLE, r"\briddles?\b|\bbrain ?teasers?\b"),
        // knowledge and small talk
        (FUN_FACT, r"\b(fun fact|random fact|facts?|tell me something (interesting|cool|new)|did you know)\b"),
        (SPACE_FACT, r"\b(space|outer space|the universe|galax(y|ies)|black holes?|astronauts?|the moon|the sun|nasa)\b"),
        (ANIMAL_FACT, r"\b(animal facts?|facts? about (an? )?animals?|about animals)\b"),
        (LIST_DAYS, r"\bdays of the week\b|\blist (the |all the )?days\b|\bwhat are the days\b"),
        (LIST_MONTHS, r"\bmonths of the year\b|\blist (the |all the )?months\b|\bwhat are the months\b"),
        (LIST_PLANETS, r"\blist (the |all the )?planets\b|\bname (the|all the) planets\b|\bwhat are the planets\b|\bplanets in (the|our) solar system\b"),
        (COUNT_DAYS, r"\bhow many days\b.*\bweek\b"),
        (COUNT_MONTHS, r"\bhow many months\b.*\byear\b"),
        (COUNT_PLANETS, r"\bhow many planets\b"),
        (MATH_SIMPLE, ARITHMETIC_PATTERN),
        (COIN_FLIP, r"\b(flip|toss) a coin\b|\bcoin (flip|toss)\b|\bheads or tails\b"),
        (DICE_ROLL, r"\broll (a |the )?(die|dice)\b|\bdice roll\b"),
        (WEATHER, r"\b(weather|raining|rain|sunny|snowing|forecast|temperature outside)\b"),
        (TIME_QUESTION, r"\bwhat time is it\b|\bwhat('s| is) the (time|date)\b|\bwhat day is (it|today)\b|\btoday's date\b"),
        (MUSIC, r"\b(music|songs?|singer|bands?|playlists?|spotify|album)\b"),
        (MOVIES, r"\b(movies?|films?|netflix|tv shows?|series|cinema)\b"),
        (FOOD, r"\b(food|pizza|burgers?|tacos?|sushi|pasta|cooking|recipes?)\b"),
        (SPORTS, r"\b(sports?|football|soccer|basketball|baseball|tennis|hockey)\b"),
        (GAMES, r"\b(video games?|gaming|minecraft|fortnite|play a game|games?)\b"),
        (BOOKS, r"\b(books?|reading|novels?|authors?)\b"),
        (PETS, r"\b(pets?|my (dog|cat|puppy|kitten|hamster|bunny))\b"),
        (TRAVEL, r"\b(travel|travelling|traveling|vacation|holiday|road trip)\b"),
        // conversation
        (HELP, r"^help\b|\bhelp me\b|\bi need help\b|\bcan you help\b"),
        (CAPABILITIES, r"\bwhat can you do\b|\bwhat do you know\b|\bwhat are you (for|good at)\b|\bhow can you help\b"),
        (REPEAT, r"\b(say that again|repeat that|what did you say|come again)\b"),
        (CONFUSED, r"\b(i don't understand|i'm confused|i am confused|that makes no sense|what do you mean)\b|^huh\b"),
        // follow-ups
        (WHY, r"^(why|how come|but why)\b"),
        (WHEN, r"^(when|since when|but when)\b"),
        (MORE, r"\b(tell me more|go on|keep going|another one|one more|say more)\b|^(more|another|and then)\b"),
        (AFFIRMATIVE, r"^(yes|yeah|yep|yup|sure|ok|okay|of course|definitely|absolutely|please do|yes please)\b"),
        (NEGATIVE, r"^(no|nope|nah|not really|no thanks|never mind|nevermind)\b"),
    ];

    let mut patterns: Vec<(IntentLabel, String)> = table
        .into_iter()
        .map(|(label, pattern)| (label, pattern.to_string()))
        .collect();

    patterns.extend(
        FEELINGS
            .iter()
            .map(|(label, words, extra)| (label.clone(), feeling_pattern(words, extra))),
    );

    patterns
}

/// Phrase rules matched by similarity rather than regex
fn fuzzy_rules() -> Vec<IntentRule> {
    vec![
        IntentRule::new(JOKE_REQUEST, FuzzyPredicate::new(&["tell me a joke", "say something funny"], 0.8)),
        IntentRule::new(HELP, FuzzyPredicate::new(&["i need some help"], 0.85)),
        IntentRule::new(DELETE_ACCOUNT, FuzzyPredicate::new(&["delete my huddle account"], 0.85)),
    ]
}

/// Every built-in rule; a rule whose pattern fails to compile is skipped
pub fn library() -> PatternLibrary {
    let mut library = PatternLibrary::new();
    let names = NameExtractor::with_exclusions(&name_exclusions());
    library.push(IntentRule::new(SELF_INTRO, NamePredicate::new(names)));
    for (label, pattern) in patterns() {
        library.push_or_skip(IntentRule::regex(label, &pattern));
    }
    for rule in fuzzy_rules() {
        library.push(rule);
    }
    library
}

pub fn priorities() -> PriorityTable {
    [
        (GREETING, 40),
        (GOOD_MORNING, 58),
        (GOOD_NIGHT, 58),
        (FAREWELL, 45),
        (THANKS, 50),
        (HOW_ARE_YOU, 60),
        (WHATS_UP, 55),
        (COMPLIMENT, 50),
        (LOVE_DECLARATION, 62),
        (INSULT, 52),
        (APOLOGY, 45),
        (LAUGH, 35),
        (BOT_IDENTITY, 90),
        (BOT_LEARNING, 85),
        (BOT_NAME, 80),
        (BOT_CREATOR, 80),
        (BOT_AGE, 75),
        (BOT_FEELINGS, 70),
        (BOT_LOCATION, 70),
        (BOT_FAVORITE_COLOR, 70),
        (BOT_FAVORITE_FOOD, 70),
        (BOT_HOBBY, 65),
        (SELF_INTRO, 85),
        (ASK_USER_NAME, 86),
        (APP_INFO, 70),
        (FEATURES_INFO, 66),
        (PRICING_INFO, 75),
        (DOWNLOAD_INFO, 75),
        (PLATFORM_INFO, 72),
        (PRIVACY_INFO, 78),
        (SAFETY_INFO, 76),
        (ACCOUNT_HELP, 74),
        (DELETE_ACCOUNT, 88),
        (PASSWORD_RESET, 86),
        (CONTACT_SUPPORT, 72),
        (BUG_REPORT, 80),
        (FEEDBACK_INFO, 68),
        (MESSAGE_BOARD_INFO, 72),
        (REVIEWS_INFO, 70),
        (SURVEY_INFO, 70),
        (TEAM_INFO, 68),
        (CAREERS_INFO, 68),
        (EMOJI_INFO, 66),
        (NOTIFICATIONS_INFO, 70),
        (DARK_MODE_INFO, 70),
        (GROUP_CHAT_INFO, 64),
        (VIDEO_CALL_INFO, 72),
        (AGE_REQUIREMENT, 74),
        (LANGUAGE_SUPPORT, 70),
        (JOKE_REQUEST, 60),
        (JOKE_ANIMAL, 95),
        (JOKE_KNOCK_KNOCK, 85),
        (JOKE_PUN, 70),
        (JOKE_PROGRAMMING, 75),
        (RIDDLE, 65),
        (FUN_FACT, 58),
        (SPACE_FACT, 62),
        (ANIMAL_FACT, 64),
        (LIST_DAYS, 80),
        (LIST_MONTHS, 80),
        (LIST_PLANETS, 82),
        (COUNT_DAYS, 84),
        (COUNT_MONTHS, 84),
        (COUNT_PLANETS, 84),
        (MATH_SIMPLE, 88),
        (COIN_FLIP, 80),
        (DICE_ROLL, 80),
        (WEATHER, 60),
        (TIME_QUESTION, 60),
        (MUSIC, 55),
        (MOVIES, 55),
        (FOOD, 50),
        (SPORTS, 55),
        (GAMES, 55),
        (BOOKS, 55),
        (PETS, 55),
        (TRAVEL, 55),
        (FEELING_HAPPY, 55),
        (FEELING_SAD, 65),
        (FEELING_ANGRY, 65),
        (FEELING_BORED, 60),
        (FEELING_LONELY, 70),
        (FEELING_TIRED, 60),
        (FEELING_HUNGRY, 58),
        (FEELING_STRESSED, 66),
        (HELP, 50),
        (CAPABILITIES, 65),
        (REPEAT, 60),
        (CONFUSED, 55),
        (WHY, 30),
        (WHEN, 30),
        (MORE, 32),
        (AFFIRMATIVE, 25),
        (NEGATIVE, 25),
    ]
    .into_iter()
    .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::normalize::Normalizer;
    use crate::resolver::IntentResolver;

    fn resolver() -> IntentResolver {
        IntentResolver::new(library(), priorities(), Normalizer::default())
    }

    fn resolve(text: &str) -> String {
        resolver()
            .resolve(text)
            .map(|l| l.to_string())
            .unwrap_or_else(|| "NONE".to_string())
    }

    #[test]
    fn test_every_pattern_compiles() {
        assert_eq!(library().len(), patterns().len() + fuzzy_rules().len() + 1);
    }

    #[test]
    fn test_every_label_has_priority() {
        let priorities = priorities();
        for label in all() {
            assert!(priorities.contains(&label), "{} has no priority", label);
        }
        assert!(library().unprioritized(&priorities).is_empty());
    }

    #[test]
    fn test_representative_inputs() {
        let cases = [
            ("hello there", "GREETING"),
            ("are you a bot", "BOT_IDENTITY"),
            ("r u a robot?", "BOT_IDENTITY"),
            ("What do you call a cow with no legs?", "JOKE_ANIMAL"),
            ("tell me a joke", "JOKE_REQUEST"),
            ("I am hungry", "FEELING_HUNGRY"),
            ("my name is Jordan", "SELF_INTRO"),
            ("what's my name", "ASK_USER_NAME"),
            ("how do I delete my account", "DELETE_ACCOUNT"),
            ("i forgot my password", "PASSWORD_RESET"),
            ("is huddle free?", "PRICING_INFO"),
            ("what is 7 times 6", "MATH_SIMPLE"),
            ("how many days are in a week", "COUNT_DAYS"),
            ("what are the planets", "LIST_PLANETS"),
            ("i love you", "LOVE_DECLARATION"),
            ("why", "WHY"),
            ("tell me more", "MORE"),
            ("nope", "NEGATIVE"),
            ("knock knock", "JOKE_KNOCK_KNOCK"),
            ("who made you", "BOT_CREATOR"),
            ("who made huddle", "TEAM_INFO"),
        ];

        for (input, expected) in cases {
            assert_eq!(resolve(input), expected, "input: {}", input);
        }
    }

    #[test]
    fn test_feelings_are_not_introductions() {
        let resolver = resolver();
        for (label, words, _) in FEELINGS {
            for word in words.iter() {
                let mut inputs = vec![format!("i am {}", word), format!("I'm {}", word)];
                inputs.extend(I_AM_FILLERS.iter().map(|f| format!("i'm {} {}", f, word)));
                for input in inputs {
                    assert_eq!(resolver.resolve(&input).as_ref(), Some(label), "input: {}", input);
                }
            }
        }
    }

    #[test]
    fn test_numbers_outside_arithmetic() {
        for input in [
            "my birthday is 12/25",
            "call support at 555-1234",
            "the meeting is 3-4pm",
            "top 10 x 2 reasons",
            "i have 3 cats and 2 dogs",
        ] {
            assert_ne!(resolve(input), "MATH_SIMPLE", "input: {}", input);
        }
        for input in ["5+3", "what's 12 / 4?", "calculate 2 x 8", "how much is 10 minus 4"] {
            assert_eq!(resolve(input), "MATH_SIMPLE", "input: {}", input);
        }
    }

    #[test]
    fn test_unmatched_input() {
        assert_eq!(resolve("qwertyuiop"), "NONE");
    }
}
