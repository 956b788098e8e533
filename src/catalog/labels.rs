//! Built-in intent labels

use crate::types::IntentLabel;

macro_rules! labels {
    ($($name:ident),* $(,)?) => {
        $(pub const $name: IntentLabel = IntentLabel::from_static(stringify!($name));)*

        /// Every built-in label, in declaration order
        pub fn all() -> Vec<IntentLabel> {
            vec![$($name),*]
        }
    };
}

labels!(
    // social
    GREETING,
    GOOD_MORNING,
    GOOD_NIGHT,
    FAREWELL,
    THANKS,
    HOW_ARE_YOU,
    WHATS_UP,
    COMPLIMENT,
    LOVE_DECLARATION,
    INSULT,
    APOLOGY,
    LAUGH,
    // about the assistant
    BOT_IDENTITY,
    BOT_LEARNING,
    BOT_NAME,
    BOT_CREATOR,
    BOT_AGE,
    BOT_FEELINGS,
    BOT_LOCATION,
    BOT_FAVORITE_COLOR,
    BOT_FAVORITE_FOOD,
    BOT_HOBBY,
    SELF_INTRO,
    ASK_USER_NAME,
    // product
    APP_INFO,
    FEATURES_INFO,
    PRICING_INFO,
    DOWNLOAD_INFO,
    PLATFORM_INFO,
    PRIVACY_INFO,
    SAFETY_INFO,
    ACCOUNT_HELP,
    DELETE_ACCOUNT,
    PASSWORD_RESET,
    CONTACT_SUPPORT,
    BUG_REPORT,
    FEEDBACK_INFO,
    MESSAGE_BOARD_INFO,
    REVIEWS_INFO,
    SURVEY_INFO,
    TEAM_INFO,
    CAREERS_INFO,
    EMOJI_INFO,
    NOTIFICATIONS_INFO,
    DARK_MODE_INFO,
    GROUP_CHAT_INFO,
    VIDEO_CALL_INFO,
    AGE_REQUIREMENT,
    LANGUAGE_SUPPORT,
    // jokes
    JOKE_REQUEST,
    JOKE_ANIMAL,
    JOKE_KNOCK_KNOCK,
    JOKE_PUN,
    JOKE_PROGRAMMING,
    RIDDLE,
    // knowledge and small talk
    FUN_FACT,
    SPACE_FACT,
    ANIMAL_FACT,
    LIST_DAYS,
    LIST_MONTHS,
    LIST_PLANETS,
    COUNT_DAYS,
    COUNT_MONTHS,
    COUNT_PLANETS,
    MATH_SIMPLE,
    COIN_FLIP,
    DICE_ROLL,
    WEATHER,
    TIME_QUESTION,
    MUSIC,
    MOVIES,
    FOOD,
    SPORTS,
    GAMES,
    BOOKS,
    PETS,
    TRAVEL,
    // feelings
    FEELING_HAPPY,
    FEELING_SAD,
    FEELING_ANGRY,
    FEELING_BORED,
    FEELING_LONELY,
    FEELING_TIRED,
    FEELING_HUNGRY,
    FEELING_STRESSED,
    // conversation
    HELP,
    CAPABILITIES,
    REPEAT,
    CONFUSED,
    // follow-ups
    WHY,
    WHEN,
    MORE,
    AFFIRMATIVE,
    NEGATIVE,
);

/// Intents answered relative to the previous turn
pub fn follow_ups() -> Vec<IntentLabel> {
    vec![WHY, WHEN, MORE, AFFIRMATIVE, NEGATIVE]
}
