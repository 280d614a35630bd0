// Feature knowledge base contents
//
// One record per feature id, in declared order. Explanations are single
// paragraphs; rule, example and mistake lists keep their teaching order.

use accent_core::feature::FeatureId;
use accent_core::record::{ExampleEntry, FeatureRecord};

const fn ex(word: &'static str, transcription: &'static str, note: &'static str) -> ExampleEntry {
    ExampleEntry {
        word,
        transcription,
        note,
    }
}

/// All thirteen records, indexed by `FeatureId::index()`.
pub static FEATURES: [FeatureRecord; 13] = [
    FeatureRecord {
        id: FeatureId::Stress,
        name: "Word Stress",
        description: "Primary and secondary stress patterns in multi-syllable words",
        explanation: "English uses stress timing - stressed syllables are longer, louder, and higher pitch. \
         Stress changes word meaning (e.g., 'REcord' noun vs 'reCORD' verb).",
        rules: &[
            "Primary stress (1): Longest, loudest, clearest vowel",
            "Secondary stress (2): Medium prominence",
            "Unstressed (0): Shortest, often reduced to schwa",
        ],
        examples: &[
            ex("photograph", "F OW1 T AH0 G R AE2 F", "Primary on 1st, secondary on 3rd"),
            ex("photography", "F AH0 T AA1 G R AH0 F IY0", "Stress shifts to 2nd syllable"),
            ex("banana", "B AH0 N AE1 N AH0", "Only middle syllable stressed"),
        ],
        common_mistakes: &[
            "Equal stress on all syllables (sounds robotic)",
            "Wrong syllable stressed (changes meaning)",
        ],
    },
    FeatureRecord {
        id: FeatureId::Rhythm,
        name: "Rhythm & Timing",
        description: "English stress-timed rhythm (vs syllable-timed languages)",
        explanation: "English rhythm is stress-timed: stressed syllables occur at regular intervals, \
         while unstressed syllables are compressed. This creates a 'bouncy' rhythm.",
        rules: &[
            "Stressed syllables: Equal time intervals",
            "Unstressed syllables: Squeezed between stresses",
            "Content words (nouns, verbs) stressed; function words (the, a, to) reduced",
        ],
        examples: &[
            ex("comfortable", "K AH1 M F ER0 T AH0 B AH0 L", "COMF-ta-ble (3 syllables sound like 2)"),
            ex("chocolate", "CH AO1 K AH0 L AH0 T", "CHOC-late (3→2 syllables)"),
            ex("interesting", "IH1 N T ER0 EH0 S T IH0 NG", "IN-tres-ting (compressed middle)"),
        ],
        common_mistakes: &[
            "Pronouncing every syllable equally (syllable-timed)",
            "Too slow, mechanically pronouncing all vowels",
        ],
    },
    FeatureRecord {
        id: FeatureId::Reduction,
        name: "Vowel Reduction",
        description: "Unstressed vowels reduce to schwa (ə) or disappear completely",
        explanation: "In natural American speech, unstressed vowels often reduce to schwa [ə] (the 'uh' sound). \
         This is the most common vowel sound in English!",
        rules: &[
            "Unstressed syllables: Full vowel → schwa (AH0)",
            "Function words: 'to' → tuh, 'can' → kn, 'and' → nd",
            "Helps maintain stress-timed rhythm",
        ],
        examples: &[
            ex("about", "AH0 B AW1 T", "'a' reduces to schwa"),
            ex("banana", "B AH0 N AE1 N AH0", "Both unstressed vowels = schwa"),
            ex("police", "P AH0 L IY1 S", "'po' reduces from 'poh' to 'puh'"),
            ex("photograph", "F OW1 T AH0 G R AE2 F", "Middle 'o' → schwa"),
        ],
        common_mistakes: &[
            "Pronouncing full vowels in unstressed syllables",
            "Using native language vowels instead of schwa",
        ],
    },
    FeatureRecord {
        id: FeatureId::Linking,
        name: "Linking & Liaison",
        description: "Connecting words together smoothly in connected speech",
        explanation: "Americans link words together without pauses. Consonants link to following vowels, \
         and similar sounds blend together.",
        rules: &[
            "Consonant-to-vowel: 'an apple' → 'a-napple'",
            "Vowel-to-vowel: Insert /y/ or /w/ glide ('see it' → 'see-yit')",
            "Same consonants: Hold once, not twice ('good day' → 'goo-day')",
        ],
        examples: &[
            ex("check_it_out", "CH EH1 K IH0 T AW1 T", "che-ki-tout (smooth connection)"),
            ex("turn_it_off", "T ER1 N IH0 T AO1 F", "tur-ni-toff"),
            ex("pick_up", "P IH1 K AH1 P", "pi-kup (k links to next syllable)"),
        ],
        common_mistakes: &[
            "Pausing between every word",
            "Pronouncing consonants twice ('good day' as 'good-d-day')",
        ],
    },
    FeatureRecord {
        id: FeatureId::Assimilation,
        name: "Sound Assimilation",
        description: "Sounds change to become more like neighboring sounds",
        explanation: "Adjacent sounds influence each other. Common assimilations include: \
         /t/ + /y/ → /ch/, /d/ + /y/ → /j/, /n/ changes place before different consonants.",
        rules: &[
            "/t/ + /y/ → 'ch': 'won't you' → 'won-choo'",
            "/d/ + /y/ → 'j': 'did you' → 'di-joo'",
            "/n/ assimilates: 'in Paris' → 'im Paris' (n→m before p)",
        ],
        examples: &[
            ex("won't_you", "W OW1 N CH UW0", "t+y → ch sound"),
            ex("did_you", "D IH1 JH UW0", "d+y → j sound"),
            ex("got_you", "G AA1 CH UW0", "gotcha (t+y → ch)"),
            ex("would_you", "W UH1 JH UW0", "wou-joo (d+y → j)"),
        ],
        common_mistakes: &[
            "Pronouncing 't' and 'y' separately",
            "Over-enunciating in fast speech",
        ],
    },
    FeatureRecord {
        id: FeatureId::TFlap,
        name: "T/D Flapping",
        description: "T and D between vowels become a quick tap (like Spanish 'r')",
        explanation: "When T or D appears between two vowels (or before syllabic L/R), \
         it becomes a flap [ɾ] - like the 'r' in Spanish 'caro'. This makes 'writer' and 'rider' sound identical!",
        rules: &[
            "T/D between vowels → flap: 'water' → 'wader'",
            "After stressed vowel works best",
            "Sounds like quick 'd' or Spanish single 'r'",
        ],
        examples: &[
            ex("water", "W AA1 DX ER0", "t → flap (sounds like 'wader')"),
            ex("better", "B EH1 DX ER0", "tt → single flap"),
            ex("city", "S IH1 DX IY0", "t → flap ('siddy')"),
            ex("matter", "M AE1 DX ER0", "tt → flap"),
            ex("party", "P AA1 R DX IY0", "t → flap"),
        ],
        common_mistakes: &[
            "Pronouncing clear 't' sound",
            "Making it too strong (should be very quick)",
        ],
    },
    FeatureRecord {
        id: FeatureId::DarkL,
        name: "Dark L (Velarization)",
        description: "L at syllable end becomes 'dark' - tongue back raised",
        explanation: "English has two L sounds: 'light L' [l] at syllable start ('like', 'love') \
         and 'dark L' [ɫ] at syllable end ('feel', 'milk'). Dark L sounds deeper, like an 'oo-l' or 'w' sound.",
        rules: &[
            "Syllable-initial: Light L (tongue tip touches)",
            "Syllable-final: Dark L (back of tongue raises toward velum)",
            "Think: 'fee-oo' instead of 'feel'",
        ],
        examples: &[
            ex("feel", "F IY1 L", "Dark L at end (fee-ul)"),
            ex("milk", "M IH1 L K", "Dark L before K"),
            ex("people", "P IY1 P AH0 L", "Final L is dark"),
            ex("bottle", "B AA1 T AH0 L", "Dark L, often syllabic"),
            ex("table", "T EY1 B AH0 L", "Dark L at end"),
        ],
        common_mistakes: &[
            "Using light L everywhere",
            "Not raising back of tongue for dark L",
        ],
    },
    FeatureRecord {
        id: FeatureId::Glottalization,
        name: "Glottal Stop (T-glottalization)",
        description: "T becomes glottal stop [ʔ] before N or at word end",
        explanation: "Instead of releasing 't', the airflow stops at the glottis (vocal cords). \
         Common in words like 'button', 'mountain', 'important'. The T almost disappears!",
        rules: &[
            "T + N: 'button' → 'bu'on' (glottal stop replaces t)",
            "T at syllable end: 'cat' → 'ca?' (often before pause)",
            "Very common in American casual speech",
        ],
        examples: &[
            ex("button", "B AH1 T N", "T → glottal stop (bu'n)"),
            ex("mountain", "M AW1 N T N", "T → glottal stop (moun'n)"),
            ex("important", "IH0 M P AO1 R T N T", "T+N → glottal stop"),
            ex("cotton", "K AA1 T N", "co'on (dropped T)"),
            ex("sentence", "S EH1 N T N S", "sen'nce"),
        ],
        common_mistakes: &[
            "Pronouncing clear 't' sound",
            "Over-enunciating in casual contexts",
        ],
    },
    FeatureRecord {
        id: FeatureId::RColoring,
        name: "R-coloring (Rhoticity)",
        description: "American English pronounces R everywhere; vowels before R are 'r-colored'",
        explanation: "American English is rhotic - we pronounce R in all positions. \
         Vowels before R get 'r-colored' quality (tongue curls back). This is a major American accent marker!",
        rules: &[
            "R after vowel: Always pronounced ('car', 'bird', 'hear')",
            "Vowel + R → r-colored vowel (retroflex)",
            "Tongue tip curls back toward roof of mouth",
        ],
        examples: &[
            ex("car", "K AA1 R", "Strong R at end"),
            ex("bird", "B ER1 D", "ER = r-colored vowel"),
            ex("butter", "B AH1 DX ER0", "Final ER is r-colored"),
            ex("park", "P AA1 R K", "R before K pronounced"),
            ex("lawyer", "L AO1 Y ER0", "Final R strong"),
        ],
        common_mistakes: &[
            "Dropping R (British style: 'cah' instead of 'car')",
            "Not curling tongue back enough",
            "German/French-style uvular R",
        ],
    },
    FeatureRecord {
        id: FeatureId::Aspiration,
        name: "Aspiration (P/T/K)",
        description: "Voiceless stops P, T, K release with strong air burst at word/syllable start",
        explanation: "At the beginning of stressed syllables, P, T, and K are pronounced with \
         a strong puff of air (aspiration). Hold your hand in front of your mouth - you should feel the air!",
        rules: &[
            "p, t, k at start of stressed syllable → aspirated [pʰ tʰ kʰ]",
            "After s: not aspirated ('spin', 'stop', 'skip')",
            "Strong air burst distinguishes from b, d, g",
        ],
        examples: &[
            ex("pin", "P IH1 N", "Strong aspiration on P"),
            ex("top", "T AA1 P", "Aspirated T at start"),
            ex("cat", "K AE1 T", "Aspirated K"),
            ex("potato", "P AH0 T EY1 T OW0", "2nd P and T aspirated"),
            ex("car", "K AA1 R", "Strong K aspiration"),
        ],
        common_mistakes: &[
            "No aspiration (sounds like b, d, g)",
            "Too weak - should feel air burst",
            "Aspirating after 's' (should be unaspirated)",
        ],
    },
    FeatureRecord {
        id: FeatureId::NasalFlap,
        name: "Nasal Flap (/nt/ cluster)",
        description: "NT sequence often becomes flap + nasal, especially in fast speech",
        explanation: "The sequence /nt/ between vowels often changes: the T becomes a flap, \
         and nasalization spreads. 'Winter' sounds like 'winner', 'twenty' like 'twenny'.",
        rules: &[
            "/nt/ between vowels → flap + nasal",
            "T may delete entirely in casual speech",
            "Previous vowel becomes nasalized",
        ],
        examples: &[
            ex("winter", "W IH1 N DX ER0", "nt → n+flap (winner)"),
            ex("twenty", "T W EH1 N DX IY0", "nt → flap (twenny)"),
            ex("center", "S EH1 N DX ER0", "nt → n+flap"),
            ex("international", "IH2 N DX ER0 N AE1 SH AH0 N AH0 L", "nt → flap"),
            ex("advantage", "AH0 D V AE1 N DX IH0 JH", "nt → flap"),
        ],
        common_mistakes: &[
            "Clear T pronunciation in casual speech",
            "Not nasalizing the preceding vowel",
        ],
    },
    FeatureRecord {
        id: FeatureId::Intonation,
        name: "Intonation Patterns",
        description: "Pitch changes that signal statement, question, emphasis, or emotion",
        explanation: "American English uses pitch patterns (intonation) to convey meaning beyond words. \
         Rising pitch = questions/uncertainty. Falling pitch = statements/certainty. High pitch = emphasis.",
        rules: &[
            "Statements: Rise then fall (↗↘) on stressed syllable",
            "Yes/no questions: Rise at end (↗)",
            "Wh-questions: Fall at end (↘)",
            "List items: Rise (↗) until last item falls (↘)",
        ],
        examples: &[
            ex("statement", "S T EY1 T M AH0 N T", "Pitch: ↗ on STAY, ↘ on ment"),
            ex("question", "K W EH1 S CH AH0 N", "Pitch rises ↗ at end for yes/no Q"),
            ex("really", "R IY1 L IY0", "High pitch = surprise/emphasis"),
            ex("understand", "AH2 N D ER0 S T AE1 N D", "Pitch peaks on -STAND"),
        ],
        common_mistakes: &[
            "Flat/monotone speech (no pitch variation)",
            "Rising on statements (sounds uncertain)",
            "Falling on yes/no questions (sounds rude)",
        ],
    },
    FeatureRecord {
        id: FeatureId::Contractions,
        name: "Informal Contractions",
        description: "Casual speech reductions: gonna, wanna, gotta, etc.",
        explanation: "In fast, casual American English, common word combinations get reduced to \
         shorter forms. These aren't written in formal contexts but are extremely common in spoken English. \
         Native speakers use these unconsciously in everyday conversation.",
        rules: &[
            "going to → gonna (only before verbs, not locations)",
            "want to → wanna; got to → gotta; have to → hafta",
            "let me → lemme; give me → gimme",
            "out of → outta; kind of → kinda; sort of → sorta",
            "Used in casual/informal speech, not formal writing",
        ],
        examples: &[
            ex("going_to", "G AH1 N AH0", "gonna - 'I'm gonna go'"),
            ex("want_to", "W AA1 N AH0", "wanna - 'I wanna try'"),
            ex("got_to", "G AA1 T AH0", "gotta - 'I gotta leave'"),
            ex("have_to", "HH AE1 F T AH0", "hafta - 'You hafta see this'"),
            ex("let_me", "L EH1 M IY0", "lemme - 'Lemme help you'"),
            ex("give_me", "G IH1 M IY0", "gimme - 'Gimme that'"),
        ],
        common_mistakes: &[
            "Using 'gonna' before places (✗ 'gonna store' → ✓ 'going to the store')",
            "Writing these forms in formal emails or essays",
            "Over-pronouncing in casual contexts ('going to' instead of 'gonna')",
        ],
    },
];
