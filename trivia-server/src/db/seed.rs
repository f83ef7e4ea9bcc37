//! Starter dataset: six categories and the classic trivia questions

use sqlx::PgPool;

use super::DbError;

/// `(id, type)`
pub const CATEGORIES: &[(i32, &str)] = &[
    (1, "Science"),
    (2, "Art"),
    (3, "Geography"),
    (4, "History"),
    (5, "Entertainment"),
    (6, "Sports"),
];

/// `(question, answer, category, difficulty)`
pub const QUESTIONS: &[(&str, &str, i32, i32)] = &[
    ("Whose autobiography is entitled 'I Know Why the Caged Bird Sings'?", "Maya Angelou", 4, 2),
    ("What boxer's original name is Cassius Clay?", "Muhammad Ali", 4, 1),
    ("What movie earned Tom Hanks his third straight Oscar nomination, in 1996?", "Apollo 13", 5, 4),
    ("What actor did author Anne Rice first denounce, then praise in the role of her beloved Lestat?", "Tom Cruise", 5, 4),
    ("What was the title of the 1990 fantasy directed by Tim Burton about a young man with multi-bladed appendages?", "Edward Scissorhands", 5, 3),
    ("Which is the only team to play in every soccer World Cup tournament?", "Brazil", 6, 3),
    ("Which country won the first ever soccer World Cup in 1930?", "Uruguay", 6, 4),
    ("Who invented Peanut Butter?", "George Washington Carver", 4, 2),
    ("What is the largest lake in Africa?", "Lake Victoria", 3, 2),
    ("In which royal palace would you find the Hall of Mirrors?", "The Palace of Versailles", 3, 3),
    ("The Taj Mahal is located in which Indian city?", "Agra", 3, 2),
    ("Which Dutch graphic artist, initials M C, was a creator of optical illusions?", "Escher", 2, 1),
    ("La Giaconda is better known as what?", "Mona Lisa", 2, 3),
    ("How many paintings did Van Gogh sell in his lifetime?", "One", 2, 4),
    ("Which American artist was a pioneer of Abstract Expressionism, and a leading exponent of action painting?", "Jackson Pollock", 2, 2),
    ("What is the heaviest organ in the human body?", "The Liver", 1, 4),
    ("Who discovered penicillin?", "Alexander Fleming", 1, 3),
    ("Hematology is a branch of medicine involving the study of what?", "Blood", 1, 4),
    ("Which dung beetle was worshipped by the ancient Egyptians?", "Scarab", 4, 4),
];

const SEED_LOCK_KEY: i64 = 0x7472_6976_6961;

/// Insert the starter dataset into empty tables.
///
/// Each table is only filled when it has no rows, so running this twice is
/// harmless. Returns `(categories, questions)` inserted.
pub async fn run(pool: &PgPool) -> Result<(u64, u64), DbError> {
    let mut tx = pool.begin().await?;

    // Serialize concurrent seeders; released on commit.
    sqlx::query("SELECT pg_advisory_xact_lock($1)")
        .bind(SEED_LOCK_KEY)
        .execute(&mut *tx)
        .await?;

    let category_count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM categories")
        .fetch_one(&mut *tx)
        .await?;
    let mut categories = 0;
    if category_count == 0 {
        for (id, kind) in CATEGORIES {
            sqlx::query("INSERT INTO categories (id, type) VALUES ($1, $2)")
                .bind(*id)
                .bind(*kind)
                .execute(&mut *tx)
                .await?;
            categories += 1;
        }
        // Keep SERIAL in step with the explicit ids above.
        sqlx::query("SELECT setval(pg_get_serial_sequence('categories', 'id'), (SELECT MAX(id) FROM categories))")
            .execute(&mut *tx)
            .await?;
    }

    let question_count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM questions")
        .fetch_one(&mut *tx)
        .await?;
    let mut questions = 0;
    if question_count == 0 {
        for (question, answer, category, difficulty) in QUESTIONS {
            sqlx::query(
                "INSERT INTO questions (question, answer, category, difficulty) VALUES ($1, $2, $3, $4)",
            )
            .bind(*question)
            .bind(*answer)
            .bind(*category)
            .bind(*difficulty)
            .execute(&mut *tx)
            .await?;
            questions += 1;
        }
    }

    tx.commit().await?;
    tracing::info!(categories, questions, "seed data inserted");
    Ok((categories, questions))
}
