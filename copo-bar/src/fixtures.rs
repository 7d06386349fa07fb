//! Small catalog shared by the unit tests

use copo_core::{Catalog, CatalogDrink};

pub fn sample_catalog() -> Catalog {
    Catalog::new(vec![
        CatalogDrink::new(
            "Caipirinha",
            "1 limão; 2 colheres de açúcar; 50 ml de cachaça; gelo",
            "Corte o limão em pedaços. Macere com o açúcar. Adicione gelo e a cachaça",
        )
        .with_prep_time("5 min")
        .with_difficulty("Fácil"),
        CatalogDrink::new(
            "Mojito",
            "50 ml de rum branco; folhas de hortelã; suco de limão; açúcar; água com gás; gelo",
            "Macere a hortelã com o açúcar e o limão. Adicione o rum e o gelo. Complete com água com gás",
        )
        .with_prep_time("7 min")
        .with_difficulty("Médio"),
        CatalogDrink::new(
            "Cosmopolitan",
            "60 ml de vodka; suco de limão; 30 ml de suco de cranberry; 15 ml de triple sec",
            "Bata tudo na coqueteleira com gelo. Coe na taça",
        ),
        CatalogDrink::new(
            "Laranjada",
            "suco de laranja, açúcar, gelo",
            "Misture tudo. Sirva gelado",
        ),
        CatalogDrink::new("Sem Receita", "", ""),
    ])
}
