//! Fixed demonstration sequence: rent pipeline, bank context, property
//! factory, board traversal, player store, and the player sheet.
//!
//! Output is illustrative; the library is the contract.

use landlord::{
    Bank, Board, Owner, Player, PlayerController, PlayerStore, PlayerView, Property,
    PropertyFactory, PropertyKind, RentChain,
};

fn main() -> landlord::Result<()> {
    demo_rent_chain()?;
    demo_bank();
    demo_factory()?;
    demo_board();
    demo_store();
    demo_sheet();
    Ok(())
}

fn demo_rent_chain() -> landlord::Result<()> {
    println!("Rent pipeline:");

    let chain = RentChain::standard();
    let alice = Player::new("Alice", 1500);
    let mut land = Property::new(PropertyKind::Land, "Rue de la Paix", 400);

    println!("bank-owned land: rent {}", chain.compute(&land, &alice)?);

    land.set_owner(Owner::player("Alice"));
    println!("self-owned land: rent {}", chain.compute(&land, &alice)?);

    land.set_owner(Owner::player("Bob"));
    land.mortgage();
    println!("mortgaged land: rent {}", chain.compute(&land, &alice)?);

    land.unmortgage();
    land.set_houses(1);
    println!(
        "land with one house: rent {}",
        chain.compute(&land, &alice)?
    );

    Ok(())
}

fn demo_bank() {
    println!("\nBank:");

    let mut bank = Bank::new(0);
    bank.set_cash(1000);
    println!("bank holds {}", bank.cash());

    bank.set_cash(500);
    println!("bank holds {}", bank.cash());
}

fn demo_factory() -> landlord::Result<()> {
    println!("\nProperty factory:");

    let factory = PropertyFactory::new();
    let listings = [
        ("land", "Rue de la Paix", 400),
        ("land", "Rue de Courcelles", 100),
        ("station", "Montparnasse", 200),
    ];

    for (tag, name, price) in listings {
        let property = factory.create(tag, name, price)?;
        println!("{}", property.describe());
    }

    if let Err(err) = factory.create("casino", "Lucky Strike", 999) {
        println!("rejected listing: {err}");
    }

    Ok(())
}

fn demo_board() {
    println!("\nBoard:");

    let mut board = Board::new();
    for name in [
        "Go",
        "Boulevard de Belleville",
        "Community Chest",
        "Rue Lecourbe",
        "Income Tax",
        "Gare Montparnasse",
        "Rue de Vaugirard",
        "Chance",
        "Rue de Courcelles",
        "Avenue de la République",
    ] {
        board.add(name);
    }

    for square in &board {
        println!("{}", square.label());
    }
}

fn demo_store() {
    println!("\nPlayer store:");

    let mut store = PlayerStore::new();
    for name in ["Alice", "Bob", "Charlie"] {
        store.upsert(Player::new(name, 1500));
    }

    println!("initial roster:");
    for player in store.sorted() {
        println!("{player}");
    }

    for name in ["Alice", "Bob", "Charlie"] {
        if let Some(player) = store.get_mut(name) {
            let cash = player.cash() + 100;
            player.set_cash(cash);
        }
    }
    store.remove("Alice");

    println!("after payday and one departure:");
    for player in store.sorted() {
        println!("{player}");
    }
}

fn demo_sheet() {
    println!("\nPlayer sheet:");

    let mut controller = PlayerController::new(Player::new("Alice", 1500), PlayerView::new());
    println!("{}", controller.sheet());

    controller.add_cash(100);
    println!("after a 100 bonus:");
    println!("{}", controller.sheet());
}
